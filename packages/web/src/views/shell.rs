use dioxus::prelude::*;
use ui::{Footer, Header};

use crate::Route;

/// Page frame shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Header {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
