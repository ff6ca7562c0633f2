use api::ArticleSummary;
use dioxus::prelude::*;

use crate::dates::short_date;
use crate::routes;

/// One listing entry linking to the article page.
#[component]
pub fn ArticleCard(article: ArticleSummary, #[props(default = true)] show_image: bool) -> Element {
    let date = short_date(&article);
    let author = article.author_name().to_string();
    let avatar = article.author_avatar().to_string();

    rsx! {
        Link { class: "card", to: routes::article(article.id),
            if show_image && !article.preview_image.is_empty() {
                img { class: "card-image", src: "{article.preview_image}", alt: "{article.title}" }
            }
            div { class: "card-body",
                span { class: "chip", "{article.tag}" }
                h3 { class: "card-title", "{article.title}" }
                p { class: "card-preview", "{article.preview_text}" }
            }
            div { class: "card-footer",
                if !avatar.is_empty() {
                    img { class: "avatar avatar-small", src: "{avatar}", alt: "{author}" }
                }
                span { class: "card-author", "{author}" }
                span { class: "card-meta", "{date} • {article.minutes_to_read} min read" }
            }
        }
    }
}
