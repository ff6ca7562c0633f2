//! # Transport seam between the typed client and the network
//!
//! [`ApiClient`](crate::ApiClient) never touches `reqwest` directly. It builds
//! an [`ApiRequest`], hands it to an [`HttpBackend`], and decodes the
//! [`ApiResponse`]. Two backends exist:
//!
//! | Backend | Where | Notes |
//! |---------|-------|-------|
//! | [`ReqwestBackend`] | browser and native | `fetch` with `credentials: include` on WASM, a cookie jar on native |
//! | `MemoryBackend` (`test-util` feature) | tests | scripted responses, records every request |
//!
//! Request URLs may be root-relative (`/api/...`); in the browser they are
//! resolved against the page origin.
//!
//! A backend only reports [`ApiError::Transport`] itself; every HTTP status,
//! including errors, comes back as an `ApiResponse` for the client to classify.

use std::future::Future;

use crate::config::BASE_URL_VAR;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// A single file part, as the image upload endpoint expects.
    File {
        field: &'static str,
        file_name: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Body,
    /// Send the session cookie with the request.
    pub with_credentials: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`ApiRequest`] to the server.
pub trait HttpBackend {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Production backend built on `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestBackend {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a client without a cookie jar: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Build the `reqwest` request for `request` without sending it.
    pub fn prepare(&self, request: ApiRequest) -> Result<reqwest::Request, ApiError> {
        let ApiRequest {
            method,
            url,
            body,
            with_credentials,
        } = request;

        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, absolute_url(&url)?);

        #[cfg(target_arch = "wasm32")]
        {
            if with_credentials {
                builder = builder.fetch_credentials_include();
            }
        }
        // Native clients always carry the jar.
        #[cfg(not(target_arch = "wasm32"))]
        let _ = with_credentials;

        builder = match body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::File {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime {
                    part = part
                        .mime_str(&mime)
                        .map_err(|e| ApiError::Transport(e.to_string()))?;
                }
                builder.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };

        builder.build().map_err(|e| ApiError::Transport(e.to_string()))
    }
}

impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(request)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Resolve a request URL. Root-relative URLs are resolved against the page
/// origin in the browser; elsewhere they are an error.
fn absolute_url(url: &str) -> Result<reqwest::Url, ApiError> {
    if let Ok(parsed) = reqwest::Url::parse(url) {
        if parsed.has_host() {
            return Ok(parsed);
        }
    }
    match page_origin() {
        Some(origin) => resolve_against(&origin, url),
        None => Err(ApiError::Transport(format!(
            "relative API URL {url} needs an absolute {BASE_URL_VAR}"
        ))),
    }
}

fn resolve_against(origin: &str, url: &str) -> Result<reqwest::Url, ApiError> {
    reqwest::Url::parse(origin)
        .and_then(|base| base.join(url))
        .map_err(|e| ApiError::Transport(format!("invalid API URL {url}: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
