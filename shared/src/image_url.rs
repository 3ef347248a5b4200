use std::fmt::Display;

use crate::config::{self, ApiConfig};
use crate::validation::has_http_scheme;

pub const PICTURE_VIEW_PATH: &str = "/picture/view/";

/// Builds `{apiBaseUrl}/picture/view/{picture_type}/{date_str}/{filename}`
/// against the process-wide configuration as it is at the moment of the call.
///
/// Segments are inserted as given: no percent-encoding and no slash
/// normalisation, so a base URL ending in `/` yields a double slash.
pub fn get_image_url(picture_type: impl Display, date_str: impl Display, filename: impl Display) -> String {
    format_image_url(&config::api_base_url(), picture_type, date_str, filename)
}

/// Joins a server-relative path, such as the `image_url` the backend returns
/// when listing pictures, onto the process-wide base URL.
pub fn resolve_image_path(path: &str) -> String {
    join_path(&config::api_base_url(), path)
}

fn format_image_url(base: &str, picture_type: impl Display, date_str: impl Display, filename: impl Display) -> String {
    format!("{base}{PICTURE_VIEW_PATH}{picture_type}/{date_str}/{filename}")
}

fn join_path(base: &str, path: &str) -> String {
    if has_http_scheme(path) {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Image URL builder bound to one configuration, for code that gets its
/// settings passed in rather than reading the process-wide holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    config: ApiConfig,
}

impl ImageUrlBuilder {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self::new(ApiConfig::new(api_base_url))
    }

    /// Snapshot of the process-wide configuration. Later writes to the holder
    /// are not seen by the returned builder.
    pub fn from_global() -> Self {
        Self::new(config::current())
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn image_url(&self, picture_type: impl Display, date_str: impl Display, filename: impl Display) -> String {
        format_image_url(self.base_url(), picture_type, date_str, filename)
    }

    pub fn resolve(&self, path: &str) -> String {
        join_path(self.base_url(), path)
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl From<ApiConfig> for ImageUrlBuilder {
    fn from(config: ApiConfig) -> Self {
        Self::new(config)
    }
}
