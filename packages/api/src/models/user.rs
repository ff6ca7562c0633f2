//! # User records and authentication payloads
//!
//! - [`User`] is what `/check_session`, `/login`, and `/signup` return on
//!   success, and what the session store holds.
//! - [`Credentials`] is the `/login` request body.
//! - [`Registration`] is the `/signup` request body. `avatar` is omitted from
//!   the JSON when not provided.
//!
//! Passwords are never printed: both request types implement `Debug` by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Avatar URL, or an empty string so image tags fall back to their placeholder.
    pub fn avatar_url(&self) -> &str {
        self.avatar.as_deref().unwrap_or("")
    }

    /// Uppercase first letter of the username, for avatar placeholders.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Login form payload.
#[derive(Clone, Serialize, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Signup form payload.
#[derive(Clone, Serialize, PartialEq, Eq, Default)]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"********")
            .field("avatar", &self.avatar)
            .finish()
    }
}
