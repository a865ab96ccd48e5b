use std::path::PathBuf;

use scholar_core::Route;
use scholar_logging::scholar_info;

use crate::persist::{AtomicFileWriter, PersistError};

/// Produces the markup of one page.
pub trait RouteRenderer {
    fn render(&self, route: Route) -> String;
}

impl<F> RouteRenderer for F
where
    F: Fn(Route) -> String,
{
    fn render(&self, route: Route) -> String {
        self(route)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route: Route,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Renders every route in `routes` and writes it to its output path below
/// the writer's root. Stops at the first write failure.
pub fn prerender(
    writer: &AtomicFileWriter,
    routes: &[Route],
    renderer: &dyn RouteRenderer,
) -> Result<Vec<RenderedPage>, PersistError> {
    let mut pages = Vec::with_capacity(routes.len());
    for &route in routes {
        let html = renderer.render(route);
        let path = writer.write(route.output_path(), &html)?;
        pages.push(RenderedPage {
            route,
            path,
            bytes: html.len(),
        });
    }
    scholar_info!(
        "prerendered {} pages into {}",
        pages.len(),
        writer.root().display()
    );
    Ok(pages)
}
