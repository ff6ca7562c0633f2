//! Session and API client context for the UI.

use api::{ApiClient, ReqwestBackend};
use dioxus::prelude::*;
use store::SessionStore;

/// The client every component talks to the server through.
pub type Client = ApiClient<ReqwestBackend>;

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Get the shared API client.
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(Client::from_env);
    let mut session = use_signal(SessionStore::new);

    // Ask the server once whether the session cookie is still good
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let result = store::session::probe(&client).await;
            session.write().settle_probe(result);
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
