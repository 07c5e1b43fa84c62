//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Status envelopes are interpreted
//! here so pages only see success values or a classified error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest, UserLookupRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::StatusResponse;
use super::types::{Listing, NewListingPayload, UserSummary};

/// Production API used when no build-time override is given.
pub const DEFAULT_BACKEND_URL: &str = "https://marketplace3562.pythonanywhere.com";

/// Base URL of the marketplace API, overridable at build time with
/// `MARKETPLACE_BACKEND_URL`.
#[must_use]
pub fn backend_url() -> &'static str {
    let raw = option_env!("MARKETPLACE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL);
    raw.trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() || path == "/" {
        return format!("{base}/");
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
/// Interpret a `/login` or `/register` envelope.
///
/// `/login` signals success with `status == "success"`; `/register` only
/// signals failure with `status == "error"`. Both must echo the account.
fn interpret_auth(resp: StatusResponse, require_success: bool) -> Result<UserSummary, ApiError> {
    let accepted = if require_success { resp.is_success() } else { !resp.is_error() };
    if !accepted {
        return Err(ApiError::Rejected { reason: resp.reason });
    }
    resp.user.ok_or_else(|| ApiError::Decode("response is missing the user record".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_publish(resp: &StatusResponse) -> Result<(), ApiError> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(ApiError::Rejected { reason: resp.reason.clone() })
    }
}

#[cfg(any(test, feature = "hydrate"))]
/// `/user` answers either `{ "email": ... }` or the bare email value.
fn parse_email_body(body: &serde_json::Value) -> Option<String> {
    let email = match body {
        serde_json::Value::Object(map) => map.get("email").and_then(serde_json::Value::as_str),
        serde_json::Value::String(text) => Some(text.as_str()),
        _ => None,
    }?;
    let email = email.trim();
    if email.is_empty() { None } else { Some(email.to_owned()) }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(&endpoint(backend_url(), path))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&endpoint(backend_url(), path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the full listing collection from `GET /`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a listing array.
pub async fn fetch_listings() -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Vec<Listing>>("/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user collection from `GET /users`. Only used for diagnostics,
/// so records are left untyped.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not an array.
pub async fn fetch_users() -> Result<Vec<serde_json::Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Vec<serde_json::Value>>("/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for wrong credentials, or a transport/decode
/// error if the request itself fails.
pub async fn login(username: &str, password: &str) -> Result<UserSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = post_json("/login", &body).await?;
        let envelope: StatusResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        interpret_auth(envelope, true)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's reason (e.g. duplicate
/// account), or a transport/decode error if the request itself fails.
pub async fn register(username: &str, email: &str, password: &str) -> Result<UserSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = post_json("/register", &body).await?;
        let envelope: StatusResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        interpret_auth(envelope, false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Publish a new listing via `POST /newproduct`. Single attempt, no retry.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the server answers with a non-success
/// status, or a transport/decode error if the request itself fails.
pub async fn publish_listing(payload: &NewListingPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/newproduct", payload).await?;
        let envelope: StatusResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        interpret_publish(&envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Look up a seller's contact email via `POST /user`.
///
/// # Errors
///
/// Returns an error if the request fails or the body carries no email.
pub async fn fetch_seller_email(username: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = UserLookupRequest { username: username.to_owned() };
        let resp = post_json("/user", &body).await?;
        let raw = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = serde_json::from_str::<serde_json::Value>(&raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.clone()));
        parse_email_body(&value).ok_or_else(|| ApiError::Decode("no email in response".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(ApiError::Unavailable)
    }
}
