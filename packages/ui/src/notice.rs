use std::time::Duration;

use dioxus::prelude::*;
use store::{Notice, NoticeClock, NOTICE_AUTO_HIDE};

use crate::icons::FaXmark;
use crate::Icon;

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Transient message bar. Hides itself after [`NOTICE_AUTO_HIDE`] or when
/// the close button is pressed; either way `on_dismiss` receives the notice.
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>, #[props(default)] on_dismiss: EventHandler<Notice>) -> Element {
    let mut notice = notice;
    let mut clock = use_signal(NoticeClock::default);

    use_effect(move || {
        let shown = notice();
        let stamp = clock.write().restart();
        let Some(shown) = shown else {
            return;
        };
        spawn(async move {
            sleep(NOTICE_AUTO_HIDE).await;
            // A newer notice restarts the clock
            if clock.peek().is_current(stamp) {
                notice.set(None);
                on_dismiss.call(shown);
            }
        });
    });

    let Some(current) = notice() else {
        return rsx! {};
    };
    let severity = current.severity.as_str();

    rsx! {
        div { class: "notice notice-{severity}", role: "status",
            span { class: "notice-message", "{current.message}" }
            button {
                class: "notice-close",
                aria_label: "Dismiss",
                onclick: move |_| {
                    notice.set(None);
                    on_dismiss.call(current.clone());
                },
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
