//! Logout transition: clear the session and go to the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{SessionState, SessionStore};
use crate::util::auth::LOGIN_PATH;

/// Clears unconditionally; there is no server-side session to end.
///
/// The redirect is only rendered after the browser has cleared storage, so a
/// server-rendered visit cannot skip the clear.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let cleared = RwSignal::new(false);

    Effect::new(move || {
        store.clear();
        session.set(SessionState { user: None, ready: true });
        cleared.set(true);
    });

    move || {
        if cleared.get() {
            view! { <Redirect path=LOGIN_PATH/> }.into_any()
        } else {
            view! { <p class="page-status">"Signing out..."</p> }.into_any()
        }
    }
}
