//! API configuration for the web client.
//!
//! [`ApiConfig`] is a plain value that can be handed to an
//! [`ImageUrlBuilder`](crate::image_url::ImageUrlBuilder). The process-wide
//! holder below keeps one of these reachable from anywhere; it is read at
//! call time by [`get_image_url`](crate::image_url::get_image_url), so a write
//! here changes every URL built afterwards.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::validation::check_base_url;

pub const DEFAULT_API_BASE_URL: &str = "http://thongtestnamloc.duckdns.org:8000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub api_base_url: String,
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into() }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

static ENV: Lazy<RwLock<ApiConfig>> = Lazy::new(|| RwLock::new(ApiConfig::default()));

/// Current base URL of the process-wide configuration.
pub fn api_base_url() -> String {
    ENV.read().api_base_url.clone()
}

/// Overwrites the process-wide base URL. The value is stored verbatim.
pub fn set_api_base_url(value: impl Into<String>) {
    let value = value.into();
    for issue in check_base_url(&value) {
        warn!(api_base_url = %value, "{issue}");
    }
    let mut env = ENV.write();
    debug!(from = %env.api_base_url, to = %value, "api base url changed");
    env.api_base_url = value;
}

/// Snapshot of the process-wide configuration.
pub fn current() -> ApiConfig {
    ENV.read().clone()
}

/// Replaces the whole process-wide configuration, returning the previous one.
pub fn replace(config: ApiConfig) -> ApiConfig {
    for issue in check_base_url(&config.api_base_url) {
        warn!(api_base_url = %config.api_base_url, "{issue}");
    }
    let previous = std::mem::replace(&mut *ENV.write(), config);
    debug!(from = %previous.api_base_url, "api config replaced");
    previous
}

pub fn reset() {
    replace(ApiConfig::default());
}
