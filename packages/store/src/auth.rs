//! Login, signup, and logout exchanges.
//!
//! Login and signup return an [`AuthOutcome`]: the session change to apply and
//! the notice to show. Callers apply the effect once the request finishes, so
//! no borrow of the session is held across the network call.
//!
//! Logout is different: the local session is cleared the moment logout is
//! invoked, before the server answers. The returned future only reports how
//! the server-side logout went.

use std::future::Future;

use api::{ApiClient, Credentials, HttpBackend, Registration};
use thiserror::Error;

use crate::notice::Notice;
use crate::session::{SessionEffect, SessionStore};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FALLBACK: &str = "Login failed";
pub const SIGNUP_SUCCESS: &str = "Signup successful!";
pub const SIGNUP_FALLBACK: &str = "Signup failed";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully!";
pub const LOGOUT_FALLBACK: &str = "Logout failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub effect: SessionEffect,
    pub notice: Notice,
}

impl AuthOutcome {
    /// Whether dismissing the notice should take the reader to the home page.
    pub fn redirects_home(&self) -> bool {
        matches!(self.effect, SessionEffect::Replace(_))
    }
}

pub async fn login<B: HttpBackend>(client: &ApiClient<B>, credentials: &Credentials) -> AuthOutcome {
    match client.login(credentials).await {
        Ok(user) => {
            tracing::info!("Logged in as {}", user.username);
            AuthOutcome {
                effect: SessionEffect::Replace(user),
                notice: Notice::success(LOGIN_SUCCESS),
            }
        }
        Err(e) => AuthOutcome {
            effect: SessionEffect::Keep,
            notice: Notice::error(e.message_or(LOGIN_FALLBACK)),
        },
    }
}

/// Local problems with the signup form, caught before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub avatar: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Registration, SignupError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(SignupError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(SignupError::MissingPassword);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        let avatar = self.avatar.trim();
        Ok(Registration {
            username: username.to_string(),
            password: self.password.clone(),
            avatar: (!avatar.is_empty()).then(|| avatar.to_string()),
        })
    }
}

pub async fn signup<B: HttpBackend>(client: &ApiClient<B>, form: &SignupForm) -> AuthOutcome {
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(e) => {
            return AuthOutcome {
                effect: SessionEffect::Keep,
                notice: Notice::error(e.to_string()),
            }
        }
    };

    match client.signup(&registration).await {
        Ok(user) => {
            tracing::info!("Signed up as {}", user.username);
            AuthOutcome {
                effect: SessionEffect::Replace(user),
                notice: Notice::success(SIGNUP_SUCCESS),
            }
        }
        Err(e) => AuthOutcome {
            effect: SessionEffect::Keep,
            notice: Notice::error(e.message_or(SIGNUP_FALLBACK)),
        },
    }
}

/// Clear the local session now and end the server session in the background.
pub fn logout<B>(client: &ApiClient<B>, session: &mut SessionStore) -> impl Future<Output = Notice> + 'static
where
    B: HttpBackend + Clone + 'static,
{
    session.clear();
    let client = client.clone();
    async move {
        match client.logout().await {
            Ok(()) => Notice::success(LOGOUT_SUCCESS),
            Err(e) => {
                tracing::error!("Server logout failed: {}", e);
                Notice::error(e.message_or(LOGOUT_FALLBACK))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiConfig, MemoryBackend, Method, User};
    use serde_json::json;

    use crate::notice::Severity;

    fn client() -> ApiClient<MemoryBackend> {
        ApiClient::new(ApiConfig::default(), MemoryBackend::new())
    }

    #[tokio::test]
    async fn test_successful_login_sets_session_and_redirects() {
        let client = client();
        client
            .backend()
            .respond(Method::Post, "/login", 200, json!({"id": 3, "username": "ada", "avatar": null}));

        let mut session = SessionStore::new();
        session.settle_probe(Err(api::ApiError::Status { status: 401, reason: None }));

        let outcome = login(&client, &Credentials::new("ada", "pw")).await;
        assert!(outcome.redirects_home());
        assert_eq!(outcome.notice, Notice::success(LOGIN_SUCCESS));

        session.apply(outcome.effect);
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("ada"));
    }

    #[tokio::test]
    async fn test_bad_credentials_show_server_message_and_keep_session() {
        let client = client();
        client
            .backend()
            .respond(Method::Post, "/login", 401, json!({"error": "Invalid credentials"}));

        let mut session = SessionStore::new();
        session.settle_probe(Err(api::ApiError::Transport("offline".into())));
        let before = session.clone();

        let outcome = login(&client, &Credentials::new("ada", "wrong")).await;
        assert_eq!(outcome.notice.severity, Severity::Error);
        assert_eq!(outcome.notice.message, "Invalid credentials");
        assert!(!outcome.redirects_home());

        session.apply(outcome.effect);
        assert_eq!(session, before);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_user() {
        let client = client();
        client.backend().respond_raw(Method::Post, "/login", 502, b"Bad gateway");

        let mut session = SessionStore::new();
        session.set_user(User {
            id: 1,
            username: "grace".into(),
            avatar: None,
        });

        let outcome = login(&client, &Credentials::new("ada", "pw")).await;
        assert_eq!(outcome.notice.message, LOGIN_FALLBACK);
        session.apply(outcome.effect);
        assert_eq!(session.user().map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn test_signup_validation_skips_network() {
        let client = client();
        let form = SignupForm {
            username: "ada".into(),
            password: "one".into(),
            confirm_password: "two".into(),
            avatar: String::new(),
        };

        let outcome = signup(&client, &form).await;
        assert_eq!(outcome.notice, Notice::error("Passwords do not match"));
        assert_eq!(outcome.effect, SessionEffect::Keep);
        assert_eq!(client.backend().request_count(), 0);
    }

    #[tokio::test]
    async fn test_signup_success() {
        let client = client();
        client
            .backend()
            .respond(Method::Post, "/signup", 201, json!({"id": 8, "username": "ada"}));

        let form = SignupForm {
            username: " ada ".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            avatar: "https://img.example.com/ada.png".into(),
        };
        let outcome = signup(&client, &form).await;
        assert!(outcome.redirects_home());
        assert_eq!(outcome.notice.message, SIGNUP_SUCCESS);

        let sent = &client.backend().requests()[0];
        assert_eq!(
            sent.body,
            api::Body::Json(json!({
                "username": "ada",
                "password": "pw",
                "avatar": "https://img.example.com/ada.png"
            }))
        );
    }

    #[tokio::test]
    async fn test_signup_rejection_uses_fallback() {
        let client = client();
        client.backend().fail(Method::Post, "/signup", "offline");

        let form = SignupForm {
            username: "ada".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            avatar: String::new(),
        };
        let outcome = signup(&client, &form).await;
        assert_eq!(outcome.notice, Notice::error(SIGNUP_FALLBACK));
    }

    #[tokio::test]
    async fn test_logout_clears_before_server_answers() {
        let client = client();
        client
            .backend()
            .respond(Method::Delete, "/logout", 500, json!({"error": "Session store unavailable"}));

        let mut session = SessionStore::new();
        session.set_user(User {
            id: 1,
            username: "ada".into(),
            avatar: None,
        });

        let pending = logout(&client, &mut session);
        assert!(session.user().is_none());
        assert_eq!(client.backend().request_count(), 0);

        let notice = pending.await;
        assert_eq!(notice, Notice::error("Session store unavailable"));
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_logout_success_notice() {
        let client = client();
        client.backend().respond_raw(Method::Delete, "/logout", 204, b"");

        let mut session = SessionStore::new();
        let notice = logout(&client, &mut session).await;
        assert_eq!(notice, Notice::success(LOGOUT_SUCCESS));
    }

    #[test]
    fn test_signup_form_requires_username_and_password() {
        let mut form = SignupForm::default();
        assert_eq!(form.validate(), Err(SignupError::MissingUsername));
        form.username = "ada".into();
        assert_eq!(form.validate(), Err(SignupError::MissingPassword));
        form.password = "pw".into();
        form.confirm_password = "pw".into();
        let registration = form.validate().unwrap();
        assert_eq!(registration.avatar, None);
    }
}
