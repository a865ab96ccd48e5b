use crate::resource::{RequestId, ResourceName};

/// Work the host must perform on behalf of [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchResource {
        request_id: RequestId,
        resource: ResourceName,
    },
    SaveBibtex {
        filename: String,
        contents: String,
    },
}
