use api::{ArticleSummary, Tag};
use dioxus::prelude::*;
use store::{ArticleFilter, FetchState, KeyedFetch};

use crate::icons::FaMagnifyingGlass;
use crate::{use_api, ArticleCard, Icon};

/// The public listing with tag chips and search. `tag` pre-selects a chip.
#[component]
pub fn HomeView(#[props(default)] tag: Option<Tag>) -> Element {
    let client = use_api();
    let mut articles = use_signal(KeyedFetch::<(), Vec<ArticleSummary>>::new);
    let mut filter = use_signal(|| ArticleFilter {
        tag,
        ..ArticleFilter::default()
    });

    // Follow category links while the page stays mounted
    let mut linked_tag = use_signal(|| tag);
    if *linked_tag.peek() != tag {
        linked_tag.set(tag);
        filter.write().tag = tag;
    }

    use_effect(move || {
        let ticket = articles.write().begin(());
        let client = client.clone();
        spawn(async move {
            let state = store::fetch::load_articles(&client).await;
            articles.write().settle(ticket, state);
        });
    });

    let ArticleFilter { tag: selected, query } = filter();

    rsx! {
        div { class: "container page",
            div { class: "page-heading",
                h1 { "Articulate Blog" }
                p { class: "muted", "Stay updated with the latest articles from our community" }
            }

            div { class: "toolbar",
                div { class: "chips",
                    button {
                        class: if selected.is_none() { "chip chip-active" } else { "chip" },
                        onclick: move |_| filter.write().tag = None,
                        "All"
                    }
                    for (tag, label) in Tag::ALL.map(|t| (t, t.as_str())) {
                        button {
                            key: "{label}",
                            class: if selected == Some(tag) { "chip chip-active" } else { "chip" },
                            onclick: move |_| filter.write().tag = Some(tag),
                            "{label}"
                        }
                    }
                }
                label { class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        r#type: "search",
                        placeholder: "Search articles...",
                        value: "{query}",
                        oninput: move |evt: FormEvent| filter.write().query = evt.value(),
                    }
                }
            }

            match articles.read().state() {
                FetchState::Pending => rsx! {
                    p { class: "loading", "Loading..." }
                },
                FetchState::Rejected(reason) => rsx! {
                    p { class: "error-text", "{reason}" }
                },
                FetchState::Resolved(list) => {
                    let shown = filter.read().apply(list);
                    rsx! {
                        if shown.is_empty() && !list.is_empty() {
                            p { class: "muted", "No articles match your filters." }
                        }
                        div { class: "grid",
                            for article in shown {
                                ArticleCard { key: "{article.id}", article: article.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
