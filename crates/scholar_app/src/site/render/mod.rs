//! Maud renderers for every page of the site.

mod layout;
mod pages;

use chrono::NaiveDate;
use scholar_core::{AppViewModel, Route};
use scholar_engine::RouteRenderer;

/// Renders pages from one view-model snapshot.
pub struct SiteRenderer<'a> {
    view: &'a AppViewModel,
    built: NaiveDate,
}

impl<'a> SiteRenderer<'a> {
    pub fn new(view: &'a AppViewModel, built: NaiveDate) -> Self {
        Self { view, built }
    }
}

impl RouteRenderer for SiteRenderer<'_> {
    fn render(&self, route: Route) -> String {
        let body = match route {
            Route::Home => pages::home(self.view),
            Route::Research => pages::research(self.view),
            Route::Publications => pages::publications(self.view),
            Route::Projects => pages::projects(self.view),
            Route::Teaching => pages::teaching(self.view),
            Route::Service => pages::service(self.view),
            Route::News => pages::news(self.view),
            Route::Contact => pages::contact(self.view),
            Route::NotFound => pages::not_found(),
        };
        layout::page(self.view, route, self.built, body).into_string()
    }
}
