//! Paths of the application's pages.
//!
//! Shared components link with these; the router in the web crate parses the
//! same paths back into its route enum.

use api::{ArticleId, Tag};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const MY_ARTICLES: &str = "/my-articles";
pub const CREATE_ARTICLE: &str = "/create-article";

pub fn article(id: ArticleId) -> String {
    format!("/articles/{id}")
}

/// The home listing with `tag` pre-selected.
pub fn category(tag: Tag) -> String {
    format!("/?tag={}", tag.as_str())
}
