//! # Content fetchers — pending / resolved / rejected per view
//!
//! Each content view (home listing, article page, my articles) owns one
//! [`KeyedFetch`]. The view calls [`begin`](KeyedFetch::begin) whenever its
//! key (route parameter) changes, which resets the state to
//! [`FetchState::Pending`] and hands back a [`Ticket`]. When the request
//! finishes, the view passes the ticket back to
//! [`settle`](KeyedFetch::settle).
//!
//! Tickets carry a generation number that increases with every `begin`. A
//! ticket from an older generation is refused, so a slow response for a key
//! the reader already navigated away from can't overwrite the newer state.
//!
//! The `load_*` functions run one request and fold its outcome into a
//! [`FetchState`], applying the fallback message each view shows when the
//! server gives no reason.

use std::fmt::Debug;

use api::{ApiClient, ApiError, ArticleDetail, ArticleId, ArticleSummary, HttpBackend, PAYWALL_REASON};

pub const ARTICLE_FALLBACK: &str = "Failed to load article";
pub const ARTICLES_FALLBACK: &str = "Failed to load articles";
pub const MY_ARTICLES_ERROR: &str = "Failed to fetch articles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Pending,
    Resolved(T),
    Rejected(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T> FetchState<T> {
    /// Fold a request outcome; rejections use the server's reason or `fallback`.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(payload) => FetchState::Resolved(payload),
            Err(e) => FetchState::Rejected(e.message_or(fallback)),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&str> {
        match self {
            FetchState::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// What the article page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlePage<'a> {
    Loading,
    Paywall,
    Failed(&'a str),
    Ready(&'a ArticleDetail),
}

impl FetchState<ArticleDetail> {
    pub fn page(&self) -> ArticlePage<'_> {
        match self {
            FetchState::Pending => ArticlePage::Loading,
            FetchState::Rejected(reason) if reason == PAYWALL_REASON => ArticlePage::Paywall,
            FetchState::Rejected(reason) => ArticlePage::Failed(reason),
            FetchState::Resolved(article) => ArticlePage::Ready(article),
        }
    }
}

/// Proof that a request was issued for `key` in a given generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    key: K,
    generation: u64,
}

/// Fetch state for one view, guarded against stale responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedFetch<K, T> {
    key: Option<K>,
    generation: u64,
    state: FetchState<T>,
}

impl<K, T> Default for KeyedFetch<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: FetchState::Pending,
        }
    }
}

impl<K: Clone + PartialEq + Debug, T> KeyedFetch<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Start a request for `key`, superseding any request still in flight.
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.state = FetchState::Pending;
        Ticket {
            key,
            generation: self.generation,
        }
    }

    /// Store a finished request's state. Returns `false` (and changes nothing)
    /// when the ticket has been superseded.
    pub fn settle(&mut self, ticket: Ticket<K>, state: FetchState<T>) -> bool {
        if ticket.generation != self.generation || self.key.as_ref() != Some(&ticket.key) {
            tracing::debug!("Dropping stale response for {:?}", ticket.key);
            return false;
        }
        self.state = state;
        true
    }
}

pub async fn load_article<B: HttpBackend>(
    client: &ApiClient<B>,
    id: ArticleId,
) -> FetchState<ArticleDetail> {
    FetchState::from_result(client.get_article(id).await, ARTICLE_FALLBACK)
}

pub async fn load_articles<B: HttpBackend>(client: &ApiClient<B>) -> FetchState<Vec<ArticleSummary>> {
    FetchState::from_result(client.list_articles().await, ARTICLES_FALLBACK)
}

/// The signed-in user's articles. Failures always read "Failed to fetch articles".
pub async fn load_my_articles<B: HttpBackend>(
    client: &ApiClient<B>,
) -> FetchState<Vec<ArticleSummary>> {
    match client.my_articles().await {
        Ok(articles) => FetchState::Resolved(articles),
        Err(e) => {
            tracing::warn!("Loading my articles failed: {}", e);
            FetchState::Rejected(MY_ARTICLES_ERROR.to_string())
        }
    }
}
