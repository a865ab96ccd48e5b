use std::sync::Arc;

use scholar_logging::{scholar_debug, scholar_warn};

use crate::bibtex::{bibtex_count, collect_bibtex};
use crate::filter::{FilterChange, FilterState};
use crate::materialize::{ListingView, Materializer, MaterializerStats};
use crate::msg::Listing;
use crate::record::{ContactData, Course, NewsItem, Profile, Project, Publication, ServiceData, Supervision};
use crate::resource::{LoadStatus, RequestId, ResourceName, ResourcePayload, ResourceSlot};
use crate::sort::SortKey;
use crate::view_model::{recent_news, AppViewModel, ResourceStatusView, RECENT_NEWS_LIMIT};

#[derive(Debug, Clone)]
struct Listings {
    publications: Materializer<Publication>,
    projects: Materializer<Project>,
    news: Materializer<NewsItem>,
    publications_view: Arc<ListingView<Publication>>,
    projects_view: Arc<ListingView<Project>>,
    news_view: Arc<ListingView<NewsItem>>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    next_request_id: RequestId,
    profile: ResourceSlot<Option<Profile>>,
    publications: ResourceSlot<Arc<[Publication]>>,
    projects: ResourceSlot<Arc<[Project]>>,
    teaching: ResourceSlot<Arc<[Course]>>,
    supervision: ResourceSlot<Arc<[Supervision]>>,
    service: ResourceSlot<ServiceData>,
    news: ResourceSlot<Arc<[NewsItem]>>,
    contact: ResourceSlot<Option<ContactData>>,
    publication_filter: FilterState,
    project_filter: FilterState,
    news_filter: FilterState,
    listings: Listings,
    expanded_abstract: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn empty<T>() -> Arc<[T]> {
    Arc::from(Vec::new())
}

fn failed<T>(message: &str) -> Result<T, String> {
    Err(message.to_string())
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            next_request_id: 1,
            profile: ResourceSlot::new(None),
            publications: ResourceSlot::new(empty()),
            projects: ResourceSlot::new(empty()),
            teaching: ResourceSlot::new(empty()),
            supervision: ResourceSlot::new(empty()),
            service: ResourceSlot::new(ServiceData::default()),
            news: ResourceSlot::new(empty()),
            contact: ResourceSlot::new(None),
            publication_filter: FilterState::with_sort(SortKey::YearDesc),
            project_filter: FilterState::with_sort(SortKey::Unsorted),
            news_filter: FilterState::with_sort(SortKey::DateDesc),
            listings: Listings {
                publications: Materializer::new(),
                projects: Materializer::new(),
                news: Materializer::new(),
                publications_view: Arc::new(ListingView::empty()),
                projects_view: Arc::new(ListingView::empty()),
                news_view: Arc::new(ListingView::empty()),
            },
            expanded_abstract: None,
            dirty: false,
        };
        state.refresh_views();
        state.dirty = false;
        state
    }

    pub fn view(&self) -> AppViewModel {
        let resources = ResourceName::ALL
            .into_iter()
            .map(|resource| {
                let status = self.status(resource);
                ResourceStatusView {
                    resource,
                    loading: *status == LoadStatus::Loading,
                    error: match status {
                        LoadStatus::Failed(message) => Some(message.clone()),
                        _ => None,
                    },
                }
            })
            .collect();

        AppViewModel {
            resources,
            profile: self.profile.data().clone(),
            publications: Arc::clone(&self.listings.publications_view),
            projects: Arc::clone(&self.listings.projects_view),
            news: Arc::clone(&self.listings.news_view),
            recent_news: recent_news(self.news.data(), RECENT_NEWS_LIMIT),
            courses: Arc::clone(self.teaching.data()),
            supervision: Arc::clone(self.supervision.data()),
            service: self.service.data().clone(),
            contact: self.contact.data().clone(),
            bibtex_count: bibtex_count(self.listings.publications_view.iter()),
            expanded_abstract: self.expanded_abstract.clone(),
            dirty: self.dirty,
        }
    }

    pub fn status(&self, resource: ResourceName) -> &LoadStatus {
        match resource {
            ResourceName::Profile => self.profile.status(),
            ResourceName::Publications => self.publications.status(),
            ResourceName::Projects => self.projects.status(),
            ResourceName::Teaching => self.teaching.status(),
            ResourceName::Supervision => self.supervision.status(),
            ResourceName::Service => self.service.status(),
            ResourceName::News => self.news.status(),
            ResourceName::Contact => self.contact.status(),
        }
    }

    fn pending_request(&self, resource: ResourceName) -> Option<RequestId> {
        match resource {
            ResourceName::Profile => self.profile.pending_request(),
            ResourceName::Publications => self.publications.pending_request(),
            ResourceName::Projects => self.projects.pending_request(),
            ResourceName::Teaching => self.teaching.pending_request(),
            ResourceName::Supervision => self.supervision.pending_request(),
            ResourceName::Service => self.service.pending_request(),
            ResourceName::News => self.news.pending_request(),
            ResourceName::Contact => self.contact.pending_request(),
        }
    }

    /// True when a route visit should issue a load for `resource`: it has
    /// neither loaded nor got a request in flight.
    pub(crate) fn needs_load(&self, resource: ResourceName) -> bool {
        *self.status(resource) != LoadStatus::Loaded && self.pending_request(resource).is_none()
    }

    pub fn filter(&self, listing: Listing) -> &FilterState {
        match listing {
            Listing::Publications => &self.publication_filter,
            Listing::Projects => &self.project_filter,
            Listing::News => &self.news_filter,
        }
    }

    pub fn materializer_stats(&self, listing: Listing) -> MaterializerStats {
        match listing {
            Listing::Publications => self.listings.publications.stats(),
            Listing::Projects => self.listings.projects.stats(),
            Listing::News => self.listings.news.stats(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Issues a new request id for `resource`, superseding any request in
    /// flight.
    pub(crate) fn begin_load(&mut self, resource: ResourceName) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        match resource {
            ResourceName::Profile => self.profile.begin(request_id),
            ResourceName::Publications => self.publications.begin(request_id),
            ResourceName::Projects => self.projects.begin(request_id),
            ResourceName::Teaching => self.teaching.begin(request_id),
            ResourceName::Supervision => self.supervision.begin(request_id),
            ResourceName::Service => self.service.begin(request_id),
            ResourceName::News => self.news.begin(request_id),
            ResourceName::Contact => self.contact.begin(request_id),
        }
        scholar_debug!("load requested: {} as request {}", resource, request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn apply_payload(&mut self, request_id: RequestId, payload: ResourcePayload) -> bool {
        let resource = payload.resource();
        let applied = match payload {
            ResourcePayload::Profile(data) => self.profile.resolve(request_id, Ok(Some(data))),
            ResourcePayload::Publications(data) => self.publications.resolve(request_id, Ok(data)),
            ResourcePayload::Projects(data) => self.projects.resolve(request_id, Ok(data)),
            ResourcePayload::Teaching(data) => self.teaching.resolve(request_id, Ok(data)),
            ResourcePayload::Supervision(data) => self.supervision.resolve(request_id, Ok(data)),
            ResourcePayload::Service(data) => self.service.resolve(request_id, Ok(data)),
            ResourcePayload::News(data) => self.news.resolve(request_id, Ok(data)),
            ResourcePayload::Contact(data) => self.contact.resolve(request_id, Ok(Some(data))),
        };
        if applied {
            scholar_debug!("loaded {} (request {})", resource, request_id);
            self.mark_dirty();
        } else {
            scholar_debug!("dropped stale response for {} (request {})", resource, request_id);
        }
        applied
    }

    pub(crate) fn apply_failure(
        &mut self,
        request_id: RequestId,
        resource: ResourceName,
        message: String,
    ) -> bool {
        let applied = match resource {
            ResourceName::Profile => self.profile.resolve(request_id, failed(&message)),
            ResourceName::Publications => self.publications.resolve(request_id, failed(&message)),
            ResourceName::Projects => self.projects.resolve(request_id, failed(&message)),
            ResourceName::Teaching => self.teaching.resolve(request_id, failed(&message)),
            ResourceName::Supervision => self.supervision.resolve(request_id, failed(&message)),
            ResourceName::Service => self.service.resolve(request_id, failed(&message)),
            ResourceName::News => self.news.resolve(request_id, failed(&message)),
            ResourceName::Contact => self.contact.resolve(request_id, failed(&message)),
        };
        if applied {
            scholar_warn!("failed to load {}: {}", resource, message);
            self.mark_dirty();
        }
        applied
    }

    pub(crate) fn apply_filter(&mut self, listing: Listing, change: FilterChange) -> bool {
        let filter = match listing {
            Listing::Publications => &mut self.publication_filter,
            Listing::Projects => &mut self.project_filter,
            Listing::News => &mut self.news_filter,
        };
        let changed = filter.apply(change);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub(crate) fn toggle_abstract(&mut self, id: String) {
        if self.expanded_abstract.as_deref() == Some(id.as_str()) {
            self.expanded_abstract = None;
        } else {
            self.expanded_abstract = Some(id);
        }
        self.mark_dirty();
    }

    /// BibTeX for the publications currently in view.
    pub fn visible_bibtex(&self) -> String {
        collect_bibtex(self.listings.publications_view.iter())
    }

    /// Re-derives the listing views. Only listings whose collection or
    /// filter changed are recomputed.
    pub(crate) fn refresh_views(&mut self) {
        let listings = &mut self.listings;
        listings.publications_view = listings
            .publications
            .materialize(self.publications.data(), &self.publication_filter);
        listings.projects_view = listings
            .projects
            .materialize(self.projects.data(), &self.project_filter);
        listings.news_view = listings
            .news
            .materialize(self.news.data(), &self.news_filter);
    }
}
