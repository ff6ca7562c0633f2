//! Markdown rendering for article bodies.
//!
//! Raw HTML in the source is rendered as text and `javascript:` links are
//! neutralised, since article content comes from other users.

use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn is_script_url(url: &str) -> bool {
    let scheme = url.trim_start().get(..11).unwrap_or("");
    scheme.eq_ignore_ascii_case("javascript:")
}

#[component]
pub fn Markdown(source: String) -> Element {
    let html = render_markdown(&source);

    rsx! {
        div { class: "markdown-body", dangerous_inner_html: "{html}" }
    }
}
