//! Settings structures for GNews-RS configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main settings structure, loaded from `gnews.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.scraper.endpoint).map_err(|e| {
            Error::Config(format!("invalid endpoint {:?}: {}", self.scraper.endpoint, e))
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::Config(format!(
                "unsupported endpoint scheme: {}",
                other
            ))),
        }
    }
}

/// What to search and where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    /// Search endpoint, without query string
    pub endpoint: String,
    /// Language used by `SearchTask::spawn_default` (empty = unspecified)
    pub default_language: String,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            endpoint: crate::DEFAULT_ENDPOINT.to_string(),
            default_language: String::new(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// User agent string (none = client default)
    pub user_agent: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            verify_ssl: true,
            user_agent: None,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    /// Proxy for all protocols
    pub all: Option<String>,
    /// HTTP proxy
    pub http: Option<String>,
    /// HTTPS proxy
    pub https: Option<String>,
}
