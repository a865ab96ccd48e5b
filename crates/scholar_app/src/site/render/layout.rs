use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, DOCTYPE};
use scholar_core::{AppViewModel, Icon, Route};

const SITE_TITLE_FALLBACK: &str = "Academic Portfolio";

/// Wraps a page body in the shared document shell: head, navigation and
/// footer.
pub fn page(view: &AppViewModel, route: Route, built: NaiveDate, body: Markup) -> Markup {
    let owner = view
        .profile
        .as_ref()
        .map(|profile| profile.name.as_str())
        .unwrap_or(SITE_TITLE_FALLBACK);
    let title = match route {
        Route::Home => owner.to_string(),
        _ => format!("{} | {}", route.title(), owner),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/assets/site.css";
            }
            body {
                a.skip-link href="#main" { "Skip to content" }
                (header(owner, route))
                main id="main" { (body) }
                (footer(view, built))
            }
        }
    }
}

fn header(owner: &str, current: Route) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (owner) }
            nav aria-label="Main navigation" {
                @for route in Route::ALL {
                    @if route == current {
                        a.active href=(route.path()) aria-current="page" { (route.title()) }
                    } @else {
                        a href=(route.path()) { (route.title()) }
                    }
                }
            }
        }
    }
}

fn footer(view: &AppViewModel, built: NaiveDate) -> Markup {
    html! {
        footer.site-footer role="contentinfo" {
            @if let Some(profile) = &view.profile {
                p { "© " (built.year()) " " (profile.name) ". All rights reserved." }
                p { (profile.affiliation) }
            }
            p.built { "Built " (date(built)) }
        }
    }
}

/// `<time>` element with an ISO `datetime` and a short US-style label.
pub fn date(date: NaiveDate) -> Markup {
    html! {
        time datetime=(date.format("%Y-%m-%d").to_string()) { (date.format("%b %-d, %Y").to_string()) }
    }
}

pub fn icon(icon: Icon) -> Markup {
    html! {
        span class={ "icon icon-" (icon.name()) } aria-hidden="true" {}
    }
}

/// Link opening in a new tab, with the screen-reader hint.
pub fn external(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" {
            (label)
            span.sr-only { " (opens in new tab)" }
        }
    }
}

/// Placeholder shown while a page's resources are missing.
pub fn status_banner(loading: bool, error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            div.error role="alert" { (message) }
        } @else if loading {
            p.loading aria-busy="true" { "Loading…" }
        }
    }
}
