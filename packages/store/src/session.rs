//! # Session store — the one current-user value of the application
//!
//! [`SessionStore`] holds the signed-in [`User`], or nothing for an anonymous
//! reader. It lives in memory only; a reload starts anonymous and asks the
//! server again through [`probe`].
//!
//! All writes funnel through three methods:
//!
//! | Method | Caller | Effect |
//! |--------|--------|--------|
//! | [`settle_probe`](SessionStore::settle_probe) | startup probe | sets the user on success, stays anonymous otherwise |
//! | [`set_user`](SessionStore::set_user) | login, signup | replaces the user outright |
//! | [`clear`](SessionStore::clear) | logout | drops the user |
//!
//! [`SessionStore::apply`] routes a [`SessionEffect`] produced by an auth flow
//! to the matching method.
//!
//! The startup probe settles at most once. If a login finishes before the
//! probe answers, the late probe result is ignored so it can't undo the login.

use api::{ApiClient, ApiError, HttpBackend, User};

/// What an auth flow wants done to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    Replace(User),
    Clear,
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    user: Option<User>,
    loading: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True until the startup probe (or an earlier auth flow) has settled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the startup probe's answer. Failures leave the reader anonymous.
    pub fn settle_probe(&mut self, result: Result<User, ApiError>) {
        if !self.loading {
            tracing::debug!("Ignoring session probe that settled after an auth flow");
            return;
        }
        self.loading = false;
        match result {
            Ok(user) => {
                tracing::info!("Session restored for {}", user.username);
                self.user = Some(user);
            }
            Err(e) => {
                tracing::debug!("No active session: {}", e);
            }
        }
    }

    pub fn set_user(&mut self, user: User) {
        self.loading = false;
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.loading = false;
        self.user = None;
    }

    pub fn apply(&mut self, effect: SessionEffect) {
        match effect {
            SessionEffect::Replace(user) => self.set_user(user),
            SessionEffect::Clear => self.clear(),
            SessionEffect::Keep => {}
        }
    }
}

/// Ask the server whether the session cookie still names a user.
pub async fn probe<B: HttpBackend>(client: &ApiClient<B>) -> Result<User, ApiError> {
    client.check_session().await
}
