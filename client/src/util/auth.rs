//! Route guard for views that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`RequireSession`], so the
//! unauthenticated redirect behaves identically everywhere. The decision
//! itself ([`check_access`]) is a pure function of the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{SessionRecord, SessionState, SessionStore};

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Query parameter carrying the pre-redirect location.
pub const REDIRECT_PARAM: &str = "redirect";

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted(SessionRecord),
    /// Navigate to this path instead of rendering the view.
    Redirect(String),
}

/// Decide whether the view at `location` may render.
///
/// Reads the store and nothing else; repeated calls with unchanged storage
/// return the same answer.
#[must_use]
pub fn check_access(store: &SessionStore, location: &str) -> Access {
    match store.get() {
        Some(record) => Access::Granted(record),
        None => Access::Redirect(login_redirect_path(location)),
    }
}

/// Login path that remembers where the user was headed.
#[must_use]
pub fn login_redirect_path(location: &str) -> String {
    if is_safe_return_path(location) {
        format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", encode_query_value(location))
    } else {
        LOGIN_PATH.to_owned()
    }
}

/// Where to go after a successful login: the remembered location when it is
/// a same-origin path, otherwise home.
#[must_use]
pub fn post_login_target(requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|path| is_safe_return_path(path))
        .map_or_else(|| "/".to_owned(), str::to_owned)
}

fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.contains("://")
        && !path.starts_with(LOGIN_PATH)
        && !path.starts_with("/logout")
}

fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            '?' => out.push_str("%3F"),
            ' ' => out.push_str("%20"),
            other => out.push(other),
        }
    }
    out
}

/// Render `children` only for a signed-in user; redirect to login otherwise.
///
/// Until the browser has read storage the guard renders a placeholder, which
/// keeps server and hydrated markup identical.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    move || {
        if !session.get().ready {
            return view! { <p class="page-status">"Loading..."</p> }.into_any();
        }
        match check_access(&store, &location.pathname.get()) {
            Access::Granted(_) => children(),
            Access::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        }
    }
}
