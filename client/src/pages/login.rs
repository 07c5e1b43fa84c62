//! Login page: username-or-email plus password against `POST /login`.
//!
//! On success the returned account is written to the session store and the
//! user is sent back to the page that redirected here (or home).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::ApiError;
use crate::net::types::UserSummary;
use crate::state::session::{SessionRecord, SessionState, SessionStore};
use crate::util::auth::{REDIRECT_PARAM, post_login_target};

pub const MISSING_CREDENTIALS: &str = "Please enter your username and password.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const LOGIN_FAILED: &str = "Something went wrong while logging in. Please try again later.";

/// Trim and require both fields. The password is sent as typed.
pub fn validate_login(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

/// Wrong credentials get a fixed message; anything else asks to retry.
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_rejection() { INVALID_CREDENTIALS.to_owned() } else { LOGIN_FAILED.to_owned() }
}

/// Run an auth request and persist the account it returns.
///
/// # Errors
///
/// Returns the user-facing message produced by `describe` when the request
/// fails; the store is left untouched in that case.
pub async fn authenticate<F, Fut>(
    store: &SessionStore,
    request: F,
    describe: fn(&ApiError) -> String,
) -> Result<SessionRecord, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<UserSummary, ApiError>>,
{
    match request().await {
        Ok(user) => {
            let record = SessionRecord::from(user);
            store.set(&record);
            Ok(record)
        }
        Err(e) => {
            log::warn!("authentication failed: {e}");
            Err(describe(&e))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login(&identifier.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        let target = post_login_target(query.with_untracked(|q| q.get(REDIRECT_PARAM)).as_deref());
        leptos::task::spawn_local(async move {
            let result =
                authenticate(&store, || crate::net::api::login(&user, &pass), login_error_message).await;
            let _ = busy.try_set(false);
            match result {
                Ok(record) => {
                    session.set(SessionState { user: Some(record), ready: true });
                    navigate(&target, NavigateOptions::default());
                }
                Err(msg) => {
                    let _ = error.try_set(Some(msg));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__field">
                        <span>"Username or Email"</span>
                        <input
                            type="text"
                            placeholder="Username or Email"
                            autocomplete="username"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="Your password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
