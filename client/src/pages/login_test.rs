use futures::executor::block_on;

use super::*;

fn alice() -> UserSummary {
    UserSummary { username: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

#[test]
fn validate_login_trims_identifier_and_keeps_password() {
    assert_eq!(
        validate_login("  alice  ", " secret "),
        Ok(("alice".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("alice", "   "), Err(MISSING_CREDENTIALS));
}

#[test]
fn rejection_maps_to_invalid_credentials() {
    let err = ApiError::Rejected { reason: Some("bad password".to_owned()) };
    assert_eq!(login_error_message(&err), INVALID_CREDENTIALS);
}

#[test]
fn transport_failure_maps_to_retry_message() {
    assert_eq!(login_error_message(&ApiError::Transport("offline".to_owned())), LOGIN_FAILED);
    assert_eq!(login_error_message(&ApiError::Status(500)), LOGIN_FAILED);
}

#[test]
fn authenticate_persists_returned_account() {
    let store = SessionStore::in_memory();
    let record = block_on(authenticate(&store, || async { Ok(alice()) }, login_error_message));
    let expected = SessionRecord { username: "alice".to_owned(), email: "alice@example.com".to_owned() };
    assert_eq!(record, Ok(expected.clone()));
    assert_eq!(store.get(), Some(expected));
}

#[test]
fn authenticate_failure_leaves_store_empty() {
    let store = SessionStore::in_memory();
    let result = block_on(authenticate(
        &store,
        || async { Err(ApiError::Rejected { reason: None }) },
        login_error_message,
    ));
    assert_eq!(result, Err(INVALID_CREDENTIALS.to_owned()));
    assert_eq!(store.get(), None);
}
