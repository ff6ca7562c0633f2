use dioxus::prelude::*;
use ui::NotFoundView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        NotFoundView { path }
    }
}
