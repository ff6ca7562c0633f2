use dioxus::prelude::*;

use crate::icons::FaLock;
use crate::{routes, Icon};

/// Shown in place of an article once the reader's free views are used up.
#[component]
pub fn Paywall() -> Element {
    rsx! {
        div { class: "paywall",
            Icon { icon: FaLock, width: 32, height: 32 }
            h2 { "You've reached your free article limit" }
            p { class: "muted",
                "Create a free account or sign in to keep reading everything Articulate has to offer."
            }
            div { class: "paywall-actions",
                Link { class: "btn btn-primary", to: routes::SIGNUP, "Sign Up" }
                Link { class: "btn btn-text", to: routes::LOGIN, "Sign In" }
            }
            Link { class: "back-link", to: routes::HOME, "Back to blog" }
        }
    }
}
