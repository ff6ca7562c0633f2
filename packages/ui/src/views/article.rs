use api::{ArticleDetail, ArticleId};
use dioxus::prelude::*;
use store::{ArticlePage, KeyedFetch};

use crate::dates::{long_date, short_date};
use crate::icons::FaArrowLeft;
use crate::{routes, use_api, Icon, Markdown, Paywall};

#[component]
fn BackLink() -> Element {
    rsx! {
        Link { class: "back-link", to: routes::HOME,
            Icon { icon: FaArrowLeft, width: 12, height: 12 }
            span { "Back to blog" }
        }
    }
}

/// Article page. Refetches whenever `id` changes; answers for an id the
/// reader already left are dropped.
#[component]
pub fn ArticleView(id: ArticleId) -> Element {
    // Track the route param in a signal so the effect re-runs on change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let client = use_api();
    let mut fetch = use_signal(KeyedFetch::<ArticleId, ArticleDetail>::new);

    use_effect(move || {
        let id = id_signal();
        let ticket = fetch.write().begin(id);
        let client = client.clone();
        spawn(async move {
            let state = store::fetch::load_article(&client, id).await;
            fetch.write().settle(ticket, state);
        });
    });

    let fetch = fetch.read();
    match fetch.state().page() {
        ArticlePage::Loading => rsx! {
            div { class: "container page", p { class: "loading", "Loading..." } }
        },
        ArticlePage::Paywall => rsx! {
            div { class: "container page", Paywall {} }
        },
        ArticlePage::Failed(reason) => rsx! {
            div { class: "container page",
                h2 { class: "error-text", "{reason}" }
                BackLink {}
            }
        },
        ArticlePage::Ready(article) => {
            let summary = &article.summary;
            let published = long_date(summary);
            let published_short = short_date(summary);
            let author = article.author_name().to_string();
            let avatar = summary.author_avatar().to_string();

            rsx! {
                article { class: "container page article",
                    BackLink {}
                    time { class: "muted", "{published}" }
                    h1 { class: "article-title", "{summary.title}" }
                    span { class: "chip", "{summary.tag}" }
                    div { class: "byline",
                        if !avatar.is_empty() {
                            img { class: "avatar", src: "{avatar}", alt: "{author}" }
                        }
                        div {
                            div { class: "byline-name", "{author}" }
                            div { class: "muted", "{summary.minutes_to_read} min read" }
                        }
                    }
                    Markdown { source: article.content.clone() }
                    hr {}
                    div { class: "article-end",
                        p { class: "muted", "Originally published on {published_short}" }
                        BackLink {}
                    }
                }
            }
        }
    }
}
