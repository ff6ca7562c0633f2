//! # Store crate — client-side state for the Articulate front end
//!
//! Framework-free state machines that the UI keeps inside signals. Nothing
//! here renders or owns a task; it decides what state a view is in and which
//! request bodies to send.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | The single current-user value and the startup probe |
//! | [`auth`] | Login, signup, and logout exchanges |
//! | [`fetch`] | Pending/resolved/rejected fetch state with stale-response guarding |
//! | [`composer`] | Preview image upload and article publishing |
//! | [`filter`] | Tag and search narrowing of the home listing |
//! | [`notice`] | Transient success/error notifications |

pub mod auth;
pub mod composer;
pub mod fetch;
pub mod filter;
pub mod notice;
pub mod session;

pub use auth::{AuthOutcome, SignupError, SignupForm};
pub use composer::{ArticleDraft, Composer, ComposerError, UploadStatus, UploadTicket};
pub use fetch::{ArticlePage, FetchState, KeyedFetch, Ticket};
pub use filter::ArticleFilter;
pub use notice::{Notice, NoticeClock, NoticeStamp, Severity, NOTICE_AUTO_HIDE};
pub use session::{SessionEffect, SessionStore};
