use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use scholar_core::ResourceName;
use scholar_logging::scholar_debug;

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
    /// Directory under the base URL that holds the JSON files.
    pub data_prefix: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
                "text/plain".to_string(),
            ],
            data_prefix: "data/".to_string(),
        }
    }
}

/// Source of raw resource bytes.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, resource: ResourceName) -> Result<FetchOutput, FetchError>;
}

/// Fetches `<base_url>/<data_prefix>/<file>` over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    base_url: String,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            base_url: base_url.into(),
            settings,
        }
    }

    pub fn resource_url(&self, resource: ResourceName) -> Result<reqwest::Url, FetchError> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut prefix = self.settings.data_prefix.trim_start_matches('/').to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        reqwest::Url::parse(&base)
            .and_then(|base| base.join(&format!("{prefix}{}", resource.file_name())))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        is_allowed(&self.settings.allowed_content_types, content_type)
    }
}

fn is_allowed(allowed: &[String], content_type: &str) -> bool {
    let ct = content_type.split(';').next().unwrap_or(content_type).trim();
    allowed.iter().any(|entry| entry.eq_ignore_ascii_case(ct))
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, resource: ResourceName) -> Result<FetchOutput, FetchError> {
        let url = self.resource_url(resource)?;
        let client = self.build_client()?;
        scholar_debug!("GET {}", url);

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            location: url.to_string(),
            content_type,
            byte_len: bytes.len() as u64,
        };
        Ok(FetchOutput { bytes, metadata })
    }
}

/// Reads resources from a local data directory, as the site builder does
/// at build time.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
    max_bytes: u64,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>, settings: &FetchSettings) -> Self {
        Self {
            root: root.into(),
            max_bytes: settings.max_bytes,
        }
    }

    pub fn resource_path(&self, resource: ResourceName) -> PathBuf {
        self.root.join(resource.file_name())
    }
}

#[async_trait::async_trait]
impl Fetcher for DirectoryFetcher {
    async fn fetch(&self, resource: ResourceName) -> Result<FetchOutput, FetchError> {
        let path = self.resource_path(resource);
        let io_error =
            |err: std::io::Error| FetchError::new(FailureKind::Io, format!("{}: {err}", path.display()));

        let metadata = tokio::fs::metadata(&path).await.map_err(io_error)?;
        if metadata.len() > self.max_bytes {
            return Err(too_large(self.max_bytes, metadata.len()));
        }
        let bytes = tokio::fs::read(&path).await.map_err(io_error)?;

        Ok(FetchOutput {
            metadata: FetchMetadata {
                location: path.display().to_string(),
                content_type: Some("application/json".to_string()),
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_joins_base_and_prefix() {
        let fetcher = ReqwestFetcher::new("https://example.org/site", FetchSettings::default());
        let url = fetcher.resource_url(ResourceName::News).unwrap();
        assert_eq!(url.as_str(), "https://example.org/site/data/news.json");

        let bare = ReqwestFetcher::new(
            "https://example.org/",
            FetchSettings {
                data_prefix: String::new(),
                ..FetchSettings::default()
            },
        );
        assert_eq!(
            bare.resource_url(ResourceName::Profile).unwrap().as_str(),
            "https://example.org/profile.json"
        );
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let allowed = FetchSettings::default().allowed_content_types;
        assert!(is_allowed(&allowed, "application/json; charset=utf-8"));
        assert!(!is_allowed(&allowed, "text/html"));
    }
}
