use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use scholar_engine::FetchSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;
use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "scholar.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    /// When set, resources are fetched over HTTP instead of read from
    /// `data_dir`.
    pub base_url: Option<String>,
    pub log: LogDestination,
    pub log_level: String,
    pub fetch: FetchConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("dist"),
            base_url: None,
            log: LogDestination::Terminal,
            log_level: "info".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_bytes: settings.max_bytes,
        }
    }
}

impl FetchConfig {
    pub fn to_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

impl SiteConfig {
    /// Reads `path`, or `./scholar.ron` when no path is given. Only the
    /// implicit default file may be missing. Also returns the file that was
    /// read, if any; logging is not up yet at this point.
    pub fn load(path: Option<&Path>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                return Ok((Self::default(), None));
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()));
            }
        };
        let config =
            Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))?;
        Ok((config, Some(path)))
    }

    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Command-line values win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(data_dir) = &cli.data_dir {
            self.data_dir = data_dir.clone();
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(log) = cli.log {
            self.log = log;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        self.fetch.to_settings()
    }

    /// Upper bound for waiting on a batch of loads.
    pub fn load_deadline(&self) -> Duration {
        let settings = self.fetch_settings();
        settings.connect_timeout + settings.request_timeout + Duration::from_secs(1)
    }
}
