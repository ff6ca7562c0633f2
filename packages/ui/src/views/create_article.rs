use api::{ApiError, ArticleId, ImageFile, Tag};
use dioxus::prelude::*;
use store::{Composer, UploadStatus};

use crate::icons::FaCloudArrowUp;
use crate::{use_api, use_session, Icon, SignInPrompt};

/// Article authoring form.
#[component]
pub fn CreateArticleView(
    /// Called with the new article's id once it is published.
    on_created: EventHandler<ArticleId>,
) -> Element {
    let client = use_api();
    let session = use_session();
    let mut composer = use_signal(Composer::new);

    let upload_client = client.clone();
    let pick_image = move |evt: FormEvent| {
        let client = upload_client.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let ticket = composer.write().begin_upload();
            let result = match file.read_bytes().await {
                Ok(bytes) => {
                    let image = ImageFile {
                        name: file.name(),
                        mime: file.content_type(),
                        bytes: bytes.to_vec(),
                    };
                    client.upload_image(image).await
                }
                Err(e) => {
                    tracing::error!("Failed to read selected image: {}", e);
                    Err(ApiError::Transport(e.to_string()))
                }
            };
            composer.write().finish_upload(ticket, result);
        }
    };

    let publish = move |evt: FormEvent| {
        evt.prevent_default();
        let body = match composer.write().begin_submit() {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Publish blocked: {}", e);
                return;
            }
        };
        let client = client.clone();
        spawn(async move {
            let result = client.create_article(&body).await;
            let created = composer.write().finish_submit(result);
            if let Some(id) = created {
                on_created.call(id);
            }
        });
    };

    let session = session.read();
    if session.is_loading() {
        return rsx! {
            div { class: "container page", p { class: "loading", "Loading..." } }
        };
    }
    if !session.is_authenticated() {
        return rsx! {
            SignInPrompt { message: "Sign in to publish an article." }
        };
    }

    let state = composer.read();
    let draft = &state.draft;
    let tag = draft.tag.as_str();
    let minutes = draft.minutes_to_read;

    rsx! {
        div { class: "container page",
            h1 { "Create New Article" }

            form { class: "card form", onsubmit: publish,
                if let Some(err) = state.error() {
                    div { class: "alert alert-error", "{err}" }
                }

                label { class: "field",
                    span { "Title" }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{draft.title}",
                        oninput: move |evt: FormEvent| composer.write().draft.title = evt.value(),
                    }
                }

                label { class: "field",
                    span { "Tag" }
                    select {
                        value: "{tag}",
                        onchange: move |evt: FormEvent| composer.write().draft.set_tag(&evt.value()),
                        for label in Tag::ALL.map(Tag::as_str) {
                            option { key: "{label}", value: "{label}", selected: label == tag, "{label}" }
                        }
                    }
                }

                label { class: "field",
                    span { "Preview Text" }
                    textarea {
                        rows: 3,
                        required: true,
                        value: "{draft.preview_text}",
                        oninput: move |evt: FormEvent| composer.write().draft.preview_text = evt.value(),
                    }
                }

                label { class: "field",
                    span { "Content (Markdown)" }
                    textarea {
                        rows: 12,
                        required: true,
                        value: "{draft.content}",
                        oninput: move |evt: FormEvent| composer.write().draft.content = evt.value(),
                    }
                }

                div { class: "field",
                    label { class: "btn btn-outline upload", r#for: "preview-image-upload",
                        Icon { icon: FaCloudArrowUp, width: 16, height: 16 }
                        "Upload Preview Image"
                    }
                    input {
                        id: "preview-image-upload",
                        class: "visually-hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: pick_image,
                    }
                    if state.upload_status() == UploadStatus::Uploading {
                        div { class: "progress progress-indeterminate", role: "progressbar" }
                    }
                    if !draft.preview_image.is_empty() {
                        img { class: "preview-thumb", src: "{draft.preview_image}", alt: "Preview" }
                    }
                }

                label { class: "field",
                    span { "Minutes to Read" }
                    input {
                        r#type: "number",
                        min: 1,
                        required: true,
                        value: "{minutes}",
                        oninput: move |evt: FormEvent| composer.write().draft.set_minutes_to_read(&evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: !state.can_submit(),
                    if state.is_submitting() { "Publishing..." } else { "Publish Article" }
                }
            }
        }
    }
}
