//! Login page view with username/password form.

use api::Credentials;
use dioxus::prelude::*;
use store::Notice;
use ui::{use_api, use_session, NoticeBanner};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut go_home = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            let credentials = Credentials::new(username().trim(), password());
            let outcome = store::auth::login(&client, &credentials).await;
            loading.set(false);

            go_home.set(outcome.redirects_home());
            session.write().apply(outcome.effect);
            notice.set(Some(outcome.notice));
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { "Sign in" }
            p { class: "muted", "Welcome back to Articulate" }

            form { class: "form", onsubmit: handle_login,
                label { class: "field",
                    span { "Username" }
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-block", r#type: "submit",
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p { class: "muted",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
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
