use crate::filter::FilterChange;
use crate::resource::{RequestId, ResourceName, ResourcePayload};
use crate::route::Route;

/// Listing pages that own a filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    Publications,
    Projects,
    News,
}

impl Listing {
    pub fn resource(self) -> ResourceName {
        match self {
            Listing::Publications => ResourceName::Publications,
            Listing::Projects => ResourceName::Projects,
            Listing::News => ResourceName::News,
        }
    }

    pub fn route(self) -> Route {
        match self {
            Listing::Publications => Route::Publications,
            Listing::Projects => Route::Projects,
            Listing::News => Route::News,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A page was opened; `query` is the raw query string, if any.
    RouteEntered { route: Route, query: Option<String> },
    /// Explicit (re)load of one resource.
    LoadRequested(ResourceName),
    /// Engine delivered a decoded resource.
    ResourceLoaded {
        request_id: RequestId,
        payload: ResourcePayload,
    },
    /// Engine failed to fetch or decode a resource.
    ResourceFailed {
        request_id: RequestId,
        resource: ResourceName,
        message: String,
    },
    /// User edited a filter control on a listing page.
    FilterChanged { listing: Listing, change: FilterChange },
    /// User expanded or collapsed a publication abstract.
    AbstractToggled { id: String },
    /// User asked for the BibTeX of the visible publications.
    DownloadBibtexClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_route_reads_listing_resource() {
        for listing in [Listing::Publications, Listing::Projects, Listing::News] {
            assert!(listing.route().resources().contains(&listing.resource()));
        }
    }
}
