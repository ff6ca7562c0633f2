use api::{ArticleId, Tag};
use dioxus::prelude::*;
use ui::{ArticleView, CreateArticleView, HomeView, MyArticlesView};

use crate::Route;

#[component]
pub fn Home(tag: String) -> Element {
    rsx! {
        HomeView { tag: Tag::parse(&tag) }
    }
}

#[component]
pub fn Article(id: ArticleId) -> Element {
    rsx! {
        ArticleView { id }
    }
}

#[component]
pub fn MyArticles() -> Element {
    rsx! {
        MyArticlesView {}
    }
}

/// Article form; opens the new article once it is published.
#[component]
pub fn CreateArticle() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateArticleView {
            on_created: move |id: ArticleId| {
                nav.push(Route::Article { id });
            },
        }
    }
}
