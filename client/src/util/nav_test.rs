use super::*;

fn labels(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|l| l.label).collect()
}

#[test]
fn guests_see_login_and_register() {
    assert_eq!(labels(&nav_links(false)), vec!["Home", "Login", "Register"]);
}

#[test]
fn signed_in_users_see_profile_and_logout() {
    assert_eq!(labels(&nav_links(true)), vec!["Home", "Profile", "Logout"]);
}

#[test]
fn home_is_active_only_at_root() {
    assert!(is_active("/", "/"));
    assert!(is_active("", "/"));
    assert!(!is_active("/profile", "/"));
}

#[test]
fn section_matches_exact_and_nested_paths() {
    assert!(is_active("/profile", "/profile"));
    assert!(is_active("/profile/", "/profile"));
    assert!(is_active("/profile/listings", "/profile"));
    assert!(!is_active("/profiles", "/profile"));
}
