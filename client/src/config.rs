//! API endpoint configuration for the browser bundle.
//!
//! The backend origin is not compiled in. By default requests go to the
//! page's own origin, where the host server proxies `/api/*` to the HR
//! backend. `HR_API_BASE_URL` at build time points the bundle elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL prefix applied to every API path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Config from the `HR_API_BASE_URL` build-time variable, or same-origin.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("HR_API_BASE_URL").unwrap_or_default())
    }

    /// Join an absolute API path (`/api/...`) onto the base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
