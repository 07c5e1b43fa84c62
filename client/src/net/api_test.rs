use super::*;
use crate::net::types::StatusResponse;

fn user(username: &str) -> UserSummary {
    UserSummary { username: username.to_owned(), email: format!("{username}@example.com") }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("https://api.example.com", "/login"), "https://api.example.com/login");
    assert_eq!(endpoint("https://api.example.com/", "newproduct"), "https://api.example.com/newproduct");
}

#[test]
fn endpoint_root_keeps_trailing_slash() {
    assert_eq!(endpoint("https://api.example.com", "/"), "https://api.example.com/");
    assert_eq!(endpoint("https://api.example.com//", ""), "https://api.example.com/");
}

#[test]
fn backend_url_has_no_trailing_slash() {
    assert!(!backend_url().ends_with('/'));
    assert!(backend_url().starts_with("http"));
}

// =============================================================
// Auth envelopes
// =============================================================

#[test]
fn login_success_yields_user() {
    let resp = StatusResponse { status: "success".to_owned(), reason: None, user: Some(user("alice")) };
    assert_eq!(interpret_auth(resp, true), Ok(user("alice")));
}

#[test]
fn login_other_status_is_rejection() {
    let resp = StatusResponse { status: "fail".to_owned(), reason: None, user: None };
    assert_eq!(interpret_auth(resp, true), Err(ApiError::Rejected { reason: None }));
}

#[test]
fn register_accepts_any_non_error_status() {
    let resp = StatusResponse { status: "ok".to_owned(), reason: None, user: Some(user("bob")) };
    assert_eq!(interpret_auth(resp, false), Ok(user("bob")));
}

#[test]
fn register_error_carries_reason() {
    let resp = StatusResponse {
        status: "error".to_owned(),
        reason: Some("Username already exists".to_owned()),
        user: None,
    };
    assert_eq!(
        interpret_auth(resp, false),
        Err(ApiError::Rejected { reason: Some("Username already exists".to_owned()) })
    );
}

#[test]
fn accepted_envelope_without_user_is_decode_error() {
    let resp = StatusResponse { status: "success".to_owned(), reason: None, user: None };
    assert!(matches!(interpret_auth(resp, true), Err(ApiError::Decode(_))));
}

// =============================================================
// Publish + user lookup
// =============================================================

#[test]
fn publish_requires_success_status() {
    let ok = StatusResponse { status: "success".to_owned(), ..StatusResponse::default() };
    let err = StatusResponse { status: "error".to_owned(), ..StatusResponse::default() };
    assert_eq!(interpret_publish(&ok), Ok(()));
    assert_eq!(interpret_publish(&err), Err(ApiError::Rejected { reason: None }));
}

#[test]
fn email_body_accepts_object_or_raw_string() {
    assert_eq!(
        parse_email_body(&serde_json::json!({ "email": "a@example.com" })),
        Some("a@example.com".to_owned())
    );
    assert_eq!(parse_email_body(&serde_json::json!("b@example.com")), Some("b@example.com".to_owned()));
}

#[test]
fn email_body_rejects_empty_or_missing() {
    assert_eq!(parse_email_body(&serde_json::json!({ "email": "  " })), None);
    assert_eq!(parse_email_body(&serde_json::json!({ "name": "x" })), None);
    assert_eq!(parse_email_body(&serde_json::json!(42)), None);
}
