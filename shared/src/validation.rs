//! Advisory checks for API base URLs.
//!
//! Nothing here rejects a value. The configuration holder stores whatever it
//! is given and uses these checks only to emit warnings.

pub const HTTP_SCHEME: &str = "http://";
pub const HTTPS_SCHEME: &str = "https://";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BaseUrlIssue {
    #[error("Base URL is empty")]
    Empty,
    #[error("Base URL does not start with {HTTP_SCHEME} or {HTTPS_SCHEME}")]
    MissingScheme,
    #[error("Base URL ends with '/', image URLs will contain a double slash")]
    TrailingSlash,
    #[error("Base URL contains whitespace")]
    ContainsWhitespace,
}

pub fn has_http_scheme(value: &str) -> bool {
    value.starts_with(HTTP_SCHEME) || value.starts_with(HTTPS_SCHEME)
}

pub fn check_base_url(value: &str) -> Vec<BaseUrlIssue> {
    if value.is_empty() {
        return vec![BaseUrlIssue::Empty];
    }

    let mut issues = Vec::new();
    if !has_http_scheme(value) {
        issues.push(BaseUrlIssue::MissingScheme);
    }
    if value.ends_with('/') {
        issues.push(BaseUrlIssue::TrailingSlash);
    }
    if value.chars().any(char::is_whitespace) {
        issues.push(BaseUrlIssue::ContainsWhitespace);
    }
    issues
}
