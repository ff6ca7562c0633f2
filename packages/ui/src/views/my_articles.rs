use api::ArticleSummary;
use dioxus::prelude::*;
use store::{FetchState, KeyedFetch};

use crate::{use_api, use_session, ArticleCard, SignInPrompt};

/// Articles written by the signed-in reader.
#[component]
pub fn MyArticlesView() -> Element {
    let client = use_api();
    let session = use_session();
    // Keyed by user id so switching accounts refetches
    let mut fetch = use_signal(KeyedFetch::<i64, Vec<ArticleSummary>>::new);

    use_effect(move || {
        let Some(user_id) = session().user().map(|u| u.id) else {
            return;
        };
        if fetch.peek().key() == Some(&user_id) {
            return;
        }
        let ticket = fetch.write().begin(user_id);
        let client = client.clone();
        spawn(async move {
            let state = store::fetch::load_my_articles(&client).await;
            fetch.write().settle(ticket, state);
        });
    });

    let session = session.read();
    if session.is_loading() {
        return rsx! {
            div { class: "container page", p { class: "loading", "Loading..." } }
        };
    }
    if !session.is_authenticated() {
        return rsx! {
            SignInPrompt { message: "Sign in to see the articles you've written." }
        };
    }

    rsx! {
        div { class: "container page",
            h1 { "My Articles" }
            match fetch.read().state() {
                FetchState::Pending => rsx! {
                    p { class: "loading", "Loading..." }
                },
                FetchState::Rejected(reason) => rsx! {
                    div { class: "alert alert-error", "{reason}" }
                },
                FetchState::Resolved(articles) if articles.is_empty() => rsx! {
                    p { class: "muted", "You haven't published any articles yet." }
                },
                FetchState::Resolved(articles) => rsx! {
                    div { class: "grid",
                        for article in articles {
                            ArticleCard { key: "{article.id}", article: article.clone(), show_image: false }
                        }
                    }
                },
            }
        }
    }
}
