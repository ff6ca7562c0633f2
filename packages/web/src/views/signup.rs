//! Registration page view.

use dioxus::prelude::*;
use store::{Notice, SignupForm};
use ui::{use_api, use_session, NoticeBanner};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut go_home = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            let submitted = form();
            let outcome = store::auth::signup(&client, &submitted).await;
            loading.set(false);

            go_home.set(outcome.redirects_home());
            session.write().apply(outcome.effect);
            notice.set(Some(outcome.notice));
        });
    };

    let SignupForm {
        username,
        password,
        confirm_password,
        avatar,
    } = form();

    rsx! {
        div { class: "auth-page",
            h1 { "Create Account" }
            p { class: "muted", "Join the Articulate community" }

            form { class: "form", onsubmit: handle_signup,
                label { class: "field",
                    span { "Username" }
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt: FormEvent| form.write().username = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Confirm password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        required: true,
                        value: "{confirm_password}",
                        oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                    }
                }
                label { class: "field",
                    span { "Avatar URL (optional)" }
                    input {
                        r#type: "url",
                        placeholder: "https://",
                        value: "{avatar}",
                        oninput: move |evt: FormEvent| form.write().avatar = evt.value(),
                    }
                }
                button { class: "btn btn-primary btn-block", r#type: "submit",
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }

            NoticeBanner {
                notice,
                on_dismiss: move |shown: Notice| {
                    if shown.is_success() && go_home() {
                        nav.push(Route::Home { tag: String::new() });
                    }
                },
            }
        }
    }
}
