//! # API crate — typed client for the Articulate blog API
//!
//! Every network call the front end makes goes through [`ApiClient`]. It owns
//! the [`ApiConfig`] (one base URL for every endpoint) and an [`HttpBackend`]
//! that actually moves bytes, so the same client runs against the browser's
//! `fetch` in production and a scripted `MemoryBackend` in tests (enabled by
//! the `test-util` feature).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution (`ARTICULATE_API_BASE_URL`) and path joining |
//! | [`error`] | [`ApiError`] taxonomy and the paywall sentinel |
//! | [`http`] | Request/response types, the [`HttpBackend`] trait, [`ReqwestBackend`] |
//! | [`models`] | Users, articles, and request bodies |
//!
//! ## Endpoints
//!
//! | Method | Call | Path | Cookie |
//! |--------|------|------|--------|
//! | GET | [`check_session`](ApiClient::check_session) | `/check_session` | yes |
//! | POST | [`login`](ApiClient::login) | `/login` | yes |
//! | POST | [`signup`](ApiClient::signup) | `/signup` | yes |
//! | DELETE | [`logout`](ApiClient::logout) | `/logout` | yes |
//! | GET | [`list_articles`](ApiClient::list_articles) | `/articles` | no |
//! | GET | [`get_article`](ApiClient::get_article) | `/articles/{id}` | yes |
//! | GET | [`my_articles`](ApiClient::my_articles) | `/my-articles` | yes |
//! | POST | [`upload_image`](ApiClient::upload_image) | `/upload-image` | yes |
//! | POST | [`create_article`](ApiClient::create_article) | `/articles/create` | yes |
//!
//! Success bodies are decoded into the call's return type. Any other status
//! becomes [`ApiError::Status`] carrying the `{error}` text when the server
//! sent one.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod config;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "test-util"))]
mod memory;
pub mod models;

pub use config::ApiConfig;
pub use error::{ApiError, PAYWALL_REASON};
pub use http::{ApiRequest, ApiResponse, Body, HttpBackend, Method, ReqwestBackend};
#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryBackend;
pub use models::{
    ArticleDetail, ArticleId, ArticleSummary, Author, CreatedArticle, Credentials, ImageFile,
    NewArticle, Registration, Tag, UploadedImage, User,
};

/// Typed client for the blog API.
#[derive(Debug, Clone)]
pub struct ApiClient<B = ReqwestBackend> {
    config: ApiConfig,
    backend: B,
}

impl ApiClient<ReqwestBackend> {
    /// Client for the configured base URL, talking over the network.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), ReqwestBackend::new())
    }
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn new(config: ApiConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the server who the session cookie belongs to.
    pub async fn check_session(&self) -> Result<User, ApiError> {
        self.call(Method::Get, "/check_session", Body::Empty, true)
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.call(Method::Post, "/login", json(credentials)?, true)
            .await
    }

    pub async fn signup(&self, registration: &Registration) -> Result<User, ApiError> {
        self.call(Method::Post, "/signup", json(registration)?, true)
            .await
    }

    /// End the server-side session. The response body is ignored.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::Delete, "/logout", Body::Empty, true)
            .await
            .map(|_| ())
    }

    pub async fn list_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        self.call(Method::Get, "/articles", Body::Empty, false)
            .await
    }

    /// Fetch one article. The cookie lets the server count page views per reader.
    pub async fn get_article(&self, id: ArticleId) -> Result<ArticleDetail, ApiError> {
        self.call(Method::Get, &format!("/articles/{id}"), Body::Empty, true)
            .await
    }

    /// Articles written by the signed-in user.
    pub async fn my_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        self.call(Method::Get, "/my-articles", Body::Empty, true)
            .await
    }

    /// Upload a preview image as the multipart field `image`.
    pub async fn upload_image(&self, file: ImageFile) -> Result<UploadedImage, ApiError> {
        let body = Body::File {
            field: "image",
            file_name: file.name,
            mime: file.mime,
            bytes: file.bytes,
        };
        self.call(Method::Post, "/upload-image", body, true).await
    }

    pub async fn create_article(&self, article: &NewArticle) -> Result<CreatedArticle, ApiError> {
        self.call(Method::Post, "/articles/create", json(article)?, true)
            .await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
        with_credentials: bool,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body, with_credentials).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!("Failed to decode {} response: {}", path, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Send a request and turn non-success statuses into [`ApiError::Status`].
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Body,
        with_credentials: bool,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.config.url(path);
        tracing::debug!("{:?} {}", method, url);

        let response = self
            .backend
            .send(ApiRequest {
                method,
                url,
                body,
                with_credentials,
            })
            .await
            .inspect_err(|e| tracing::warn!("{:?} {} failed: {}", method, path, e))?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::warn!("{:?} {} -> {}: {}", method, path, response.status, err);
            Err(err)
        }
    }
}

fn json<T: Serialize>(value: &T) -> Result<Body, ApiError> {
    serde_json::to_value(value)
        .map(Body::Json)
        .map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            ApiError::Encode(e.to_string())
        })
}
