use std::sync::Arc;

use crate::materialize::ListingView;
use crate::record::{ContactData, Course, NewsItem, Profile, Project, Publication, ServiceData, Supervision};
use crate::resource::ResourceName;
use crate::sort::SortKey;

/// News items shown on the home page.
pub const RECENT_NEWS_LIMIT: usize = 6;

/// `{loading, error}` of one resource as seen by the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatusView {
    pub resource: ResourceName,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub resources: Vec<ResourceStatusView>,
    pub profile: Option<Profile>,
    pub publications: Arc<ListingView<Publication>>,
    pub projects: Arc<ListingView<Project>>,
    pub news: Arc<ListingView<NewsItem>>,
    pub recent_news: Vec<NewsItem>,
    pub courses: Arc<[Course]>,
    pub supervision: Arc<[Supervision]>,
    pub service: ServiceData,
    pub contact: Option<ContactData>,
    /// Publications in the current view that carry BibTeX.
    pub bibtex_count: usize,
    pub expanded_abstract: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn resource(&self, resource: ResourceName) -> Option<&ResourceStatusView> {
        self.resources.iter().find(|status| status.resource == resource)
    }

    pub fn is_loading(&self, resource: ResourceName) -> bool {
        self.resource(resource).is_some_and(|status| status.loading)
    }
}

/// The `limit` most recent news items, newest first.
pub fn recent_news(items: &[NewsItem], limit: usize) -> Vec<NewsItem> {
    let mut recent = crate::sort::sorted(items, SortKey::DateDesc);
    recent.truncate(limit);
    recent
}
