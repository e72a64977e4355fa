use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "SCRAPE_ENDPOINT";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for talking to the scraping service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// URL the scrape request is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Image shown in place of scraped images that fail to load
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// User agent sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for endpoint
fn default_endpoint() -> String {
    "http://localhost:3001/api/scrape".to_string()
}

/// Default value for placeholder_image
fn default_placeholder_image() -> String {
    "https://via.placeholder.com/200x150?text=Image+Not+Available".to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            placeholder_image: default_placeholder_image(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    /// Create a configuration pointing at the given endpoint
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the endpoint with `SCRAPE_ENDPOINT` if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.is_empty() {
                ::log::debug!("Using endpoint from {}: {}", ENDPOINT_ENV, endpoint);
                self.endpoint = endpoint;
            }
        }
        self
    }
}
