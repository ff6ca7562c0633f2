//! API base URL configuration.
//!
//! Every request the client issues is built from one [`ApiConfig`], so all call
//! sites target the same backend. The base URL comes from
//! `ARTICULATE_API_BASE_URL`:
//!
//! - **WASM**: read at compile time (`option_env!`), since the browser has no
//!   process environment.
//! - **Native**: `.env` is loaded with `dotenvy`, then the process environment
//!   is consulted at runtime.
//!
//! When unset, the base URL defaults to [`DEFAULT_BASE_URL`]. In the browser
//! that is the root-relative `/api` path the development server proxies to
//! the remote API, resolved against the page origin when a request is built.
//! Native builds have no page origin, so their default is absolute.

/// Environment variable naming the API base URL.
pub const BASE_URL_VAR: &str = "ARTICULATE_API_BASE_URL";

/// Base URL used when nothing is configured.
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_BASE_URL: &str = "/api";

/// Base URL used when nothing is configured: the dev server's proxy path.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Where the remote API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Resolve the config from the build/runtime environment.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        match option_env!("ARTICULATE_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Resolve the config from the build/runtime environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.base_url.is_empty() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
