//! Named JSON resources and their per-resource load slots.

use std::fmt;
use std::sync::Arc;

use crate::record::{ContactData, Course, NewsItem, Profile, Project, Publication, ServiceData, Supervision};

/// Correlates a load request with its response.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceName {
    Profile,
    Publications,
    Projects,
    Teaching,
    Supervision,
    Service,
    News,
    Contact,
}

impl ResourceName {
    pub const ALL: [ResourceName; 8] = [
        ResourceName::Profile,
        ResourceName::Publications,
        ResourceName::Projects,
        ResourceName::Teaching,
        ResourceName::Supervision,
        ResourceName::Service,
        ResourceName::News,
        ResourceName::Contact,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ResourceName::Profile => "profile.json",
            ResourceName::Publications => "publications.json",
            ResourceName::Projects => "projects.json",
            ResourceName::Teaching => "teaching.json",
            ResourceName::Supervision => "supervision.json",
            ResourceName::Service => "service.json",
            ResourceName::News => "news.json",
            ResourceName::Contact => "contact.json",
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A decoded resource, tagged by which file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePayload {
    Profile(Profile),
    Publications(Arc<[Publication]>),
    Projects(Arc<[Project]>),
    Teaching(Arc<[Course]>),
    Supervision(Arc<[Supervision]>),
    Service(ServiceData),
    News(Arc<[NewsItem]>),
    Contact(ContactData),
}

impl ResourcePayload {
    pub fn resource(&self) -> ResourceName {
        match self {
            ResourcePayload::Profile(_) => ResourceName::Profile,
            ResourcePayload::Publications(_) => ResourceName::Publications,
            ResourcePayload::Projects(_) => ResourceName::Projects,
            ResourcePayload::Teaching(_) => ResourceName::Teaching,
            ResourcePayload::Supervision(_) => ResourceName::Supervision,
            ResourcePayload::Service(_) => ResourceName::Service,
            ResourcePayload::News(_) => ResourceName::News,
            ResourcePayload::Contact(_) => ResourceName::Contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Load state for one resource: `{data, loading, error}`.
///
/// Starts in `Loading` with a caller-supplied default. Only the most
/// recently issued request may resolve the slot; responses to superseded
/// requests are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSlot<T> {
    data: T,
    status: LoadStatus,
    pending: Option<RequestId>,
}

impl<T: Default> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> ResourceSlot<T> {
    pub fn new(default: T) -> Self {
        Self {
            data: default,
            status: LoadStatus::Loading,
            pending: None,
        }
    }

    /// Starts a new load; any earlier request becomes stale.
    pub fn begin(&mut self, request_id: RequestId) {
        self.pending = Some(request_id);
        self.status = LoadStatus::Loading;
    }

    /// Applies a response. Returns `false` when the response was stale and
    /// therefore ignored.
    pub fn resolve(&mut self, request_id: RequestId, result: Result<T, String>) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        match result {
            Ok(data) => {
                self.data = data;
                self.status = LoadStatus::Loaded;
            }
            Err(message) => {
                self.status = LoadStatus::Failed(message);
            }
        }
        true
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct_json_files() {
        let mut names: Vec<&str> = ResourceName::ALL.iter().map(|r| r.file_name()).collect();
        assert!(names.iter().all(|name| name.ends_with(".json")));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ResourceName::ALL.len());
    }
}
