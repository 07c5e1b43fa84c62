use super::*;

#[test]
fn validate_registration_trims_every_field() {
    assert_eq!(
        validate_registration(" alice ", " a@b.com ", " secret1 ", "secret1 "),
        Ok(Registration {
            username: "alice".to_owned(),
            email: "a@b.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn blank_field_is_reported_first() {
    assert_eq!(validate_registration("alice", "  ", "abc", "xyz"), Err(FIELDS_REQUIRED));
}

#[test]
fn mismatch_is_checked_before_length() {
    assert_eq!(validate_registration("alice", "a@b.com", "abc", "abd"), Err(PASSWORD_MISMATCH));
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(validate_registration("alice", "a@b.com", "abc12", "abc12"), Err(PASSWORD_TOO_SHORT));
    assert!(validate_registration("alice", "a@b.com", "abc123", "abc123").is_ok());
}

#[test]
fn server_reason_is_surfaced() {
    let err = ApiError::Rejected { reason: Some("Username already taken".to_owned()) };
    assert_eq!(register_error_message(&err), "Username already taken");
}

#[test]
fn missing_reason_falls_back_to_generic_message() {
    assert_eq!(register_error_message(&ApiError::Rejected { reason: None }), REGISTER_FAILED);
    assert_eq!(register_error_message(&ApiError::Transport("offline".to_owned())), REGISTER_FAILED);
}
