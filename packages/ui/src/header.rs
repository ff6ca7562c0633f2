use dioxus::prelude::*;
use store::Notice;

use crate::icons::{FaBars, FaFilePen, FaNewspaper, FaXmark};
use crate::{routes, use_api, use_session, Icon, NoticeBanner};

#[component]
fn Avatar(src: String, initial: String) -> Element {
    rsx! {
        if src.is_empty() {
            span { class: "avatar avatar-placeholder", "{initial}" }
        } else {
            img { class: "avatar", src: "{src}", alt: "{initial}" }
        }
    }
}

/// Top bar: brand, account menu or sign-in buttons, and the logout notice.
#[component]
pub fn Header() -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut notice = use_signal(|| None::<Notice>);
    let mut menu_open = use_signal(|| false);
    let mut drawer_open = use_signal(|| false);

    let logout = move |_| {
        menu_open.set(false);
        drawer_open.set(false);
        let pending = store::auth::logout(&client, &mut session.write());
        spawn(async move {
            let result = pending.await;
            notice.set(Some(result));
        });
    };

    let user = session().user().cloned();
    let drawer_class = if drawer_open() { "nav nav-open" } else { "nav" };

    rsx! {
        header { class: "site-header",
            div { class: "container header-bar",
                Link { class: "brand", to: routes::HOME, "Articulate" }

                button {
                    class: "nav-toggle",
                    aria_label: "Menu button",
                    onclick: move |_| drawer_open.toggle(),
                    if drawer_open() {
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                }

                nav { class: "{drawer_class}",
                    if let Some(user) = user {
                        div { class: "account",
                            button {
                                class: "account-trigger",
                                onclick: move |_| menu_open.toggle(),
                                span { class: "welcome", "Welcome, {user.username}!" }
                                Avatar { src: user.avatar_url().to_string(), initial: user.initial() }
                            }
                            if menu_open() {
                                div { class: "account-menu", onclick: move |_| {
                                        menu_open.set(false);
                                        drawer_open.set(false);
                                    },
                                    Link { class: "menu-item", to: routes::MY_ARTICLES,
                                        Icon { icon: FaNewspaper, width: 14, height: 14 }
                                        "My Articles"
                                    }
                                    Link { class: "menu-item", to: routes::CREATE_ARTICLE,
                                        Icon { icon: FaFilePen, width: 14, height: 14 }
                                        "Create New Article"
                                    }
                                }
                            }
                        }
                        button { class: "btn btn-primary", onclick: logout, "Logout" }
                    } else {
                        Link { class: "btn btn-text", to: routes::LOGIN, "Sign In" }
                        Link { class: "btn btn-primary", to: routes::SIGNUP, "Sign Up" }
                    }
                }
            }
            NoticeBanner { notice }
        }
    }
}
