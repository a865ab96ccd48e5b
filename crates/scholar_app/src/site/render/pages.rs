use maud::{html, Markup};
use scholar_core::{
    theme_link, AppViewModel, FilterState, Icon, NewsItem, Profile, Project, Publication,
    PublicationType, Record, Route, ServiceEntry, BIBTEX_FILENAME,
};

use super::layout::{date, external, icon, status_banner};

/// Loading/error banner for the resources a route reads.
fn banner(view: &AppViewModel, route: Route) -> Markup {
    let statuses = view
        .resources
        .iter()
        .filter(|status| route.resources().contains(&status.resource));
    let mut loading = false;
    let mut error = None;
    for status in statuses {
        loading |= status.loading;
        if error.is_none() {
            error = status.error.as_deref();
        }
    }
    status_banner(loading, error)
}

pub fn home(view: &AppViewModel) -> Markup {
    html! {
        (banner(view, Route::Home))
        @if let Some(profile) = &view.profile {
            (hero(profile))
            @if !profile.highlights.is_empty() {
                section.highlights aria-label="Highlights" {
                    h2 { "Highlights" }
                    div.cards {
                        @for highlight in &profile.highlights {
                            article.card {
                                (icon(Icon::for_highlight(&highlight.icon)))
                                span.year { (highlight.year) }
                                h3 {
                                    @if let Some(link) = &highlight.link {
                                        (external(link, &highlight.title))
                                    } @else {
                                        (highlight.title)
                                    }
                                }
                                p { (highlight.description) }
                            }
                        }
                    }
                }
            }
        }
        @if !view.recent_news.is_empty() {
            section.recent-news aria-label="Recent news" {
                h2 { "Recent News" }
                div.cards {
                    @for item in &view.recent_news {
                        (news_card(item))
                    }
                }
                a.button href=(Route::News.path()) { "All News & Talks" }
            }
        }
        @if let Some(profile) = &view.profile {
            section.bio aria-label="Biography" {
                h2 { "About" }
                @if !profile.portrait_image_path.is_empty() {
                    img src=(profile.portrait_image_path) alt={ "Portrait of " (profile.name) };
                }
                @for paragraph in profile.bio_paragraphs() {
                    p { (paragraph) }
                }
                @if !profile.cv_pdf_path.is_empty() {
                    a.button href=(profile.cv_pdf_path) download { "Download CV" }
                }
            }
        }
    }
}

fn hero(profile: &Profile) -> Markup {
    html! {
        section.hero aria-label="Introduction" {
            span.badge { (profile.affiliation) }
            h1 { (profile.name) }
            @if let Some(title) = profile.titles.first() {
                p.lead { (title) }
            }
            p { (profile.research_statement) }
            div.actions {
                a.button href=(Route::Publications.path()) { "Publications" }
                a.button.outline href=(Route::Projects.path()) { "Projects" }
                a.button.outline href=(Route::Contact.path()) { "Contact" }
                @if !profile.links.scholar.is_empty() {
                    (external(&profile.links.scholar, "Scholar"))
                }
                @if !profile.links.dblp.is_empty() {
                    (external(&profile.links.dblp, "DBLP"))
                }
            }
        }
    }
}

pub fn research(view: &AppViewModel) -> Markup {
    let themes = &view.publications.facets.themes;
    html! {
        h1 { "Research" }
        (banner(view, Route::Research))
        @if let Some(profile) = &view.profile {
            p.lead { (profile.research_statement) }
            @for paragraph in profile.bio_paragraphs() {
                p { (paragraph) }
            }
        }
        @if !themes.is_empty() {
            section aria-label="Research themes" {
                h2 { "Themes" }
                ul.themes {
                    @for theme in themes {
                        li { a href=(theme_link(theme)) { (theme) } }
                    }
                }
            }
        }
    }
}

pub fn publications(view: &AppViewModel) -> Markup {
    let listing = &view.publications;
    let facets = &listing.facets;
    let filter = &listing.filter;
    let kind_options: Vec<(String, String)> = facets
        .kinds
        .iter()
        .map(|key| {
            let label = PublicationType::from_key(key)
                .map(PublicationType::label)
                .unwrap_or(key.as_str());
            (key.clone(), label.to_string())
        })
        .collect();

    html! {
        h1 { "Publications" }
        (banner(view, Route::Publications))
        form.filters method="get" role="search" {
            (search_box(filter))
            (select("year", "All years", &years(&facets.years), filter.year.as_option().map(i32::to_string).as_deref()))
            (select("type", "All types", &kind_options, filter.kind.as_option().map(String::as_str)))
            (select("theme", "All themes", &pairs(&facets.themes), filter.theme.as_option().map(String::as_str)))
            (select("author", "All authors", &pairs(&facets.authors), filter.author.as_option().map(String::as_str)))
            label {
                input type="checkbox" name="featured" value="1" checked[filter.featured_only];
                " Featured only"
            }
            (sort_select(filter, &[("year-desc", "Newest first"), ("title", "Title")]))
        }
        p.summary aria-live="polite" {
            "Showing " (listing.len()) " of " (listing.total()) " publications"
            @if view.bibtex_count > 0 {
                " · "
                a href={ "/" (BIBTEX_FILENAME) } download { "BibTeX (" (view.bibtex_count) ")" }
            }
        }
        @if listing.is_empty() && listing.total() > 0 {
            p.empty { "No publications match the current filters." }
        }
        ol.publications {
            @for publication in listing.iter() {
                (publication_entry(publication, view.expanded_abstract.as_deref() == Some(publication.id.as_str())))
            }
        }
    }
}

fn publication_entry(publication: &Publication, expanded: bool) -> Markup {
    html! {
        li.publication id=(publication.id) {
            div.meta {
                span.badge { (publication.kind.label()) }
                span.year { (publication.year) }
                @if publication.featured {
                    span.badge.featured { "Featured" }
                }
                @for award in &publication.awards {
                    span.badge.award { (icon(Icon::Trophy)) (award) }
                }
            }
            h3 { (publication.title) }
            p.authors { (publication.authors.join(", ")) }
            p.venue { em { (publication.display_venue()) } }
            @if publication.citations > 0 {
                p.citations { (publication.citations) " citations" }
            }
            @if !publication.abstract_text.is_empty() {
                details open[expanded] {
                    summary { "Abstract" }
                    p { (publication.abstract_text) }
                }
            }
            @let links = publication.links();
            @if !links.is_empty() {
                ul.links {
                    @for link in &links {
                        li { (external(&link.href, link.label)) }
                    }
                }
            }
        }
    }
}

pub fn projects(view: &AppViewModel) -> Markup {
    let listing = &view.projects;
    let filter = &listing.filter;
    html! {
        h1 { "Projects" }
        (banner(view, Route::Projects))
        form.filters method="get" {
            (select("status", "All statuses", &pairs(&listing.facets.kinds), filter.kind.as_option().map(String::as_str)))
            (select("theme", "All themes", &pairs(&listing.facets.themes), filter.theme.as_option().map(String::as_str)))
        }
        @if listing.is_empty() && listing.total() > 0 {
            p.empty { "No projects match the current filters." }
        }
        div.cards {
            @for project in listing.iter() {
                (project_card(project))
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.card.project id=(project.id) {
            @if !project.image.is_empty() {
                img src=(project.image) alt="";
            }
            div.meta {
                span class={ "badge status-" (project.status.as_str()) } { (project.status.as_str()) }
                @if !project.timeframe.is_empty() {
                    span.timeframe { (project.timeframe) }
                }
            }
            h3 { (project.title) }
            @if !project.role.is_empty() {
                p.role { (project.role) }
            }
            p { (project.description) }
            @if !project.collaborators.is_empty() {
                p.collaborators { "With " (project.collaborators.join(", ")) }
            }
            @if !project.themes.is_empty() {
                ul.themes {
                    @for theme in &project.themes {
                        li { a href=(theme_link(theme)) { (theme) } }
                    }
                }
            }
            ul.links {
                @for (label, href) in &project.links {
                    @if !href.is_empty() {
                        li { (external(href, label)) }
                    }
                }
            }
        }
    }
}

pub fn teaching(view: &AppViewModel) -> Markup {
    html! {
        h1 { "Teaching" }
        (banner(view, Route::Teaching))
        section aria-label="Courses" {
            h2 { "Courses" }
            @for course in view.courses.iter() {
                article.course id=(course.id) {
                    h3 { (course.name) }
                    p.meta { (course.level) " · " (course.years) }
                    @if !course.description.is_empty() {
                        p { (course.description) }
                    }
                    ul.links {
                        @for (label, href) in course.visible_links() {
                            li { (external(href, label)) }
                        }
                    }
                }
            }
        }
        @if !view.supervision.is_empty() {
            section aria-label="Supervision" {
                h2 { "Supervision" }
                table.supervision {
                    thead { tr { th { "Name" } th { "Level" } th { "Years" } th { "Topic" } th { "Outcome" } } }
                    tbody {
                        @for student in view.supervision.iter() {
                            tr {
                                td { (student.name) }
                                td { (student.level) }
                                td { (student.years) }
                                td {
                                    (student.topic)
                                    @if !student.co_supervisors.is_empty() {
                                        br;
                                        small { "Co-supervised with " (student.co_supervisors.join(", ")) }
                                    }
                                }
                                td { (student.outcome) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn service(view: &AppViewModel) -> Markup {
    html! {
        h1 { "Service" }
        (banner(view, Route::Service))
        @for (heading, entries) in view.service.sections() {
            @if !entries.is_empty() {
                section aria-label=(heading) {
                    h2 { (heading) }
                    ul.service {
                        @for entry in entries {
                            (service_entry(entry))
                        }
                    }
                }
            }
        }
    }
}

fn service_entry(entry: &ServiceEntry) -> Markup {
    html! {
        li {
            strong { (entry.role) }
            @if let Some(host) = entry.host() {
                ", " (host)
            }
            @if let Some(period) = entry.period() {
                span.period { " (" (period) ")" }
            }
        }
    }
}

pub fn news(view: &AppViewModel) -> Markup {
    let listing = &view.news;
    let filter = &listing.filter;
    html! {
        h1 { "News & Talks" }
        (banner(view, Route::News))
        form.filters method="get" {
            (select("type", "All", &pairs(&listing.facets.kinds), filter.kind.as_option().map(String::as_str)))
            (select("year", "All years", &years(&listing.facets.years), filter.year.as_option().map(i32::to_string).as_deref()))
        }
        div.news {
            @for item in listing.iter() {
                (news_card(item))
            }
        }
    }
}

fn news_card(item: &NewsItem) -> Markup {
    html! {
        article.card.news-item id=(item.id) {
            div.meta {
                (icon(Icon::for_news(&item.kind)))
                span.badge { (item.kind.as_str()) }
                @if let Some(day) = item.date() {
                    (date(day))
                } @else {
                    span.date { (item.date) }
                }
            }
            h3 { (item.title) }
            p {
                (item.description)
                @if !item.link.is_empty() {
                    " "
                    (external(&item.link, "more…"))
                }
            }
        }
    }
}

pub fn contact(view: &AppViewModel) -> Markup {
    html! {
        h1 { "Contact" }
        (banner(view, Route::Contact))
        @if let Some(contact) = &view.contact {
            dl.contact {
                dt { "Email" }
                dd { a href={ "mailto:" (contact.email) } { (contact.email) } }
                @if !contact.phone.is_empty() {
                    dt { "Phone" }
                    dd { a href={ "tel:" (contact.phone) } { (contact.phone) } }
                }
                @if !contact.office.is_empty() {
                    dt { "Office" }
                    dd { (contact.office) }
                }
                dt { "Address" }
                dd {
                    address {
                        @for line in [&contact.address.line1, &contact.address.line2, &contact.address.line3, &contact.address.country] {
                            @if !line.is_empty() {
                                (line) br;
                            }
                        }
                    }
                }
            }
            @if !contact.social_links.is_empty() {
                ul.social {
                    @for social in &contact.social_links {
                        li { (external(&social.url, &social.platform)) }
                    }
                }
            }
        }
    }
}

pub fn not_found() -> Markup {
    html! {
        h1 { "Page not found" }
        p { "The page you are looking for does not exist." }
        a.button href="/" { "Back to home" }
    }
}

fn search_box(filter: &FilterState) -> Markup {
    html! {
        label.sr-only for="q" { "Search" }
        input id="q" type="search" name="q" value=(filter.query) placeholder="Search titles, authors, keywords…";
    }
}

fn select(name: &str, all_label: &str, options: &[(String, String)], selected: Option<&str>) -> Markup {
    html! {
        select name=(name) aria-label=(all_label) {
            option value="all" selected[selected.is_none()] { (all_label) }
            @for (value, label) in options {
                option value=(value) selected[selected == Some(value.as_str())] { (label) }
            }
        }
    }
}

fn sort_select(filter: &FilterState, options: &[(&str, &str)]) -> Markup {
    html! {
        select name="sort" aria-label="Sort order" {
            @for (value, label) in options {
                option value=(value) selected[filter.sort.as_str() == *value] { (label) }
            }
        }
    }
}

fn pairs(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|value| (value.clone(), value.clone())).collect()
}

fn years(values: &[i32]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|year| (year.to_string(), year.to_string()))
        .collect()
}
