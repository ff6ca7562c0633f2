//! This crate contains all shared UI for the workspace.
//!
//! Components read the session and API client from context, so the app has
//! to be wrapped in [`AuthProvider`]. Links use the paths in [`routes`].

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin, FaTwitter};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ARTICULATE_CSS: Asset = asset!("/assets/articulate.css");

pub mod routes;

mod auth;
pub use auth::{use_api, use_session, AuthProvider, Client};

mod dates;

mod markdown;
pub use markdown::{render_markdown, Markdown};

mod notice;
pub use notice::NoticeBanner;

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

mod article_card;
pub use article_card::ArticleCard;

mod paywall;
pub use paywall::Paywall;

pub mod views;
pub use views::{ArticleView, CreateArticleView, HomeView, MyArticlesView, NotFoundView, SignInPrompt};
