use super::*;

#[test]
fn user_message_prefers_server_reason() {
    let err = ApiError::Rejected { reason: Some("Email already registered".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_for_blank_reason() {
    let err = ApiError::Rejected { reason: Some("   ".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Registration failed");
}

#[test]
fn user_message_hides_transport_cause() {
    let err = ApiError::Transport("dns lookup failed".to_owned());
    assert_eq!(err.user_message("Try again later"), "Try again later");
}

#[test]
fn is_rejection_only_for_rejected() {
    assert!(ApiError::Rejected { reason: None }.is_rejection());
    assert!(!ApiError::Status(500).is_rejection());
    assert!(!ApiError::Unavailable.is_rejection());
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
    assert_eq!(ApiError::Rejected { reason: None }.to_string(), "request rejected: no reason given");
}
