//! The fixed page set of the site.

use std::path::PathBuf;

use crate::resource::ResourceName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Research,
    Publications,
    Projects,
    Teaching,
    Service,
    News,
    Contact,
    NotFound,
}

impl Route {
    /// Every prerendered page, in navigation order. `NotFound` is excluded.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Research,
        Route::Publications,
        Route::Projects,
        Route::Teaching,
        Route::Service,
        Route::News,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Research => "/research",
            Route::Publications => "/publications",
            Route::Projects => "/projects",
            Route::Teaching => "/teaching",
            Route::Service => "/service",
            Route::News => "/news",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Research => "Research",
            Route::Publications => "Publications",
            Route::Projects => "Projects",
            Route::Teaching => "Teaching",
            Route::Service => "Service",
            Route::News => "News",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// Resolves a location such as `/publications/?theme=x#top`.
    pub fn from_path(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Resources a page reads. The header and footer need the profile on
    /// every page.
    pub fn resources(self) -> &'static [ResourceName] {
        match self {
            Route::Home => &[ResourceName::Profile, ResourceName::News],
            Route::Research => &[ResourceName::Profile],
            Route::Publications => &[ResourceName::Profile, ResourceName::Publications],
            Route::Projects => &[ResourceName::Profile, ResourceName::Projects],
            Route::Teaching => &[
                ResourceName::Profile,
                ResourceName::Teaching,
                ResourceName::Supervision,
            ],
            Route::Service => &[ResourceName::Profile, ResourceName::Service],
            Route::News => &[ResourceName::Profile, ResourceName::News],
            Route::Contact => &[ResourceName::Profile, ResourceName::Contact],
            Route::NotFound => &[ResourceName::Profile],
        }
    }

    /// Output file relative to the site root.
    pub fn output_path(self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::NotFound => PathBuf::from("404.html"),
            other => PathBuf::from(other.path().trim_start_matches('/')).join("index.html"),
        }
    }
}

/// Value of the `theme` parameter in a query string, used to seed the
/// publication theme filter from links like `/publications?theme=Ethics`.
pub fn theme_from_query(query: &str) -> Option<String> {
    let query = query.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "theme")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Publications URL pre-filtered to `theme`.
pub fn theme_link(theme: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("theme", theme)
        .finish();
    format!("{}?{}", Route::Publications.path(), query)
}
