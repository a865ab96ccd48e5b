use std::sync::Arc;

use scholar_core::{ResourceName, ResourcePayload};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed {resource}: {source}")]
    Json {
        resource: ResourceName,
        #[source]
        source: serde_json::Error,
    },
}

/// Decodes the bytes of a resource into its typed payload.
///
/// The payload is trusted to have the fixed shape of its file; a UTF-8 BOM
/// is tolerated.
pub fn decode_payload(resource: ResourceName, bytes: &[u8]) -> Result<ResourcePayload, DecodeError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let payload = match resource {
        ResourceName::Profile => ResourcePayload::Profile(parse(resource, bytes)?),
        ResourceName::Publications => ResourcePayload::Publications(parse_list(resource, bytes)?),
        ResourceName::Projects => ResourcePayload::Projects(parse_list(resource, bytes)?),
        ResourceName::Teaching => ResourcePayload::Teaching(parse_list(resource, bytes)?),
        ResourceName::Supervision => ResourcePayload::Supervision(parse_list(resource, bytes)?),
        ResourceName::Service => ResourcePayload::Service(parse(resource, bytes)?),
        ResourceName::News => ResourcePayload::News(parse_list(resource, bytes)?),
        ResourceName::Contact => ResourcePayload::Contact(parse(resource, bytes)?),
    };
    Ok(payload)
}

fn parse<T: DeserializeOwned>(resource: ResourceName, bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(|source| DecodeError::Json { resource, source })
}

fn parse_list<T: DeserializeOwned>(
    resource: ResourceName,
    bytes: &[u8],
) -> Result<Arc<[T]>, DecodeError> {
    parse::<Vec<T>>(resource, bytes).map(Arc::from)
}
