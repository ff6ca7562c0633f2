use dioxus::prelude::*;

use crate::routes;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div { class: "container page prompt",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: routes::HOME, "Back to blog" }
        }
    }
}
