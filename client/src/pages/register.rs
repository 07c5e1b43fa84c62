//! Account registration page backed by `POST /register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::pages::login::authenticate;
use crate::state::session::{SessionState, SessionStore};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const REGISTER_FAILED: &str = "Something went wrong during registration";

/// Trimmed registration fields ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Checks run in order and the first failure is reported.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let (username, email, password, confirm) = (username.trim(), email.trim(), password.trim(), confirm.trim());
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// The server's reason for a refused registration, else a generic message.
pub fn register_error_message(err: &ApiError) -> String {
    err.user_message(REGISTER_FAILED)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Typing into any field clears the previous error.
    let bind = move |field: RwSignal<String>| {
        move |ev: leptos::ev::Event| {
            field.set(event_target_value(&ev));
            error.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = authenticate(
                &store,
                || crate::net::api::register(&input.username, &input.email, &input.password),
                register_error_message,
            )
            .await;
            let _ = busy.try_set(false);
            match result {
                Ok(record) => {
                    session.set(SessionState { user: Some(record), ready: true });
                    navigate("/", NavigateOptions::default());
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
                <h1>"Create an account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        <span>"Full name"</span>
                        <input
                            type="text"
                            placeholder="Your name"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=bind(username)
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=bind(email)
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=bind(password)
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=bind(confirm)
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
