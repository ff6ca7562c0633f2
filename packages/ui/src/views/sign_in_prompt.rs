use dioxus::prelude::*;

use crate::routes;

/// Stand-in for pages that need a signed-in reader.
#[component]
pub fn SignInPrompt(message: String) -> Element {
    rsx! {
        div { class: "container page prompt",
            h2 { "Sign in required" }
            p { class: "muted", "{message}" }
            div { class: "paywall-actions",
                Link { class: "btn btn-primary", to: routes::LOGIN, "Sign In" }
                Link { class: "btn btn-text", to: routes::SIGNUP, "Sign Up" }
            }
        }
    }
}
