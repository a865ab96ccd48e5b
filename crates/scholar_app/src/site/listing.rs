use std::fmt::Write;

use scholar_core::{AppViewModel, Listing, ListingView, NewsItem, Project, Publication};

/// Plain-text rendering of a listing for the terminal.
pub fn format_listing(view: &AppViewModel, listing: Listing) -> String {
    match listing {
        Listing::Publications => format_view(&view.publications, "publications", publication_line),
        Listing::Projects => format_view(&view.projects, "projects", project_line),
        Listing::News => format_view(&view.news, "news items", news_line),
    }
}

fn format_view<R>(view: &ListingView<R>, noun: &str, line: fn(&R) -> String) -> String {
    let mut out = String::new();
    for record in view.iter() {
        out.push_str(&line(record));
        out.push('\n');
    }
    let _ = writeln!(out, "{} of {} {}", view.len(), view.total(), noun);
    out
}

fn publication_line(publication: &Publication) -> String {
    let featured = if publication.featured { " *" } else { "" };
    format!(
        "{}  {}  [{}] {}{}",
        publication.year,
        publication.title,
        publication.kind.label(),
        publication.display_venue(),
        featured
    )
}

fn project_line(project: &Project) -> String {
    let timeframe = if project.timeframe.is_empty() {
        "-"
    } else {
        project.timeframe.as_str()
    };
    format!("{}  {}  [{}]", timeframe, project.title, project.status.as_str())
}

fn news_line(item: &NewsItem) -> String {
    format!("{}  {}  [{}]", item.date, item.title, item.kind)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use scholar_core::{
        update, AppState, Effect, FilterChange, Msg, NewsKind, ProjectStatus, ResourcePayload,
        SortKey,
    };

    use super::*;

    fn project(id: &str, timeframe: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            role: String::new(),
            status,
            timeframe: timeframe.to_string(),
            collaborators: Vec::new(),
            themes: Vec::new(),
            image: String::new(),
            links: Default::default(),
        }
    }

    fn news(id: &str, date: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            date: date.to_string(),
            kind: NewsKind::Other("talk".to_string()),
            title: format!("News {id}"),
            description: String::new(),
            link: String::new(),
        }
    }

    fn loaded(payload: ResourcePayload) -> AppState {
        let (state, effects) = update(AppState::new(), Msg::LoadRequested(payload.resource()));
        let Some(Effect::FetchResource { request_id, .. }) = effects.into_iter().next() else {
            panic!("expected a fetch effect");
        };
        update(state, Msg::ResourceLoaded { request_id, payload }).0
    }

    #[test]
    fn projects_keep_file_order_and_filter_by_status() {
        let state = loaded(ResourcePayload::Projects(Arc::from(vec![
            project("b", "2019–2022", ProjectStatus::Completed),
            project("a", "", ProjectStatus::Active),
        ])));
        assert_eq!(
            format_listing(&state.view(), Listing::Projects),
            "2019–2022  Project b  [completed]\n-  Project a  [active]\n2 of 2 projects\n"
        );

        let (state, _) = update(
            state,
            Msg::FilterChanged {
                listing: Listing::Projects,
                change: FilterChange::Kind(scholar_core::Selection::Only("active".to_string())),
            },
        );
        assert_eq!(
            format_listing(&state.view(), Listing::Projects),
            "-  Project a  [active]\n1 of 2 projects\n"
        );
    }

    #[test]
    fn news_is_newest_first_unless_sorted_by_title() {
        let state = loaded(ResourcePayload::News(Arc::from(vec![
            news("alpha", "2020-01-01"),
            news("zulu", "2024-06-30"),
        ])));
        assert_eq!(
            format_listing(&state.view(), Listing::News),
            "2024-06-30  News zulu  [talk]\n2020-01-01  News alpha  [talk]\n2 of 2 news items\n"
        );

        let (state, _) = update(
            state,
            Msg::FilterChanged {
                listing: Listing::News,
                change: FilterChange::Sort(SortKey::TitleAsc),
            },
        );
        assert_eq!(
            format_listing(&state.view(), Listing::News),
            "2020-01-01  News alpha  [talk]\n2024-06-30  News zulu  [talk]\n2 of 2 news items\n"
        );
    }
}
