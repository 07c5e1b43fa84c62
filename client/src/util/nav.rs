//! Navbar link set and active-route matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const HOME: NavLink = NavLink { label: "Home", href: "/" };
const PROFILE: NavLink = NavLink { label: "Profile", href: "/profile" };
const LOGOUT: NavLink = NavLink { label: "Logout", href: "/logout" };
const LOGIN: NavLink = NavLink { label: "Login", href: "/login" };
const REGISTER: NavLink = NavLink { label: "Register", href: "/register" };

/// Links visible for the current session.
#[must_use]
pub fn nav_links(logged_in: bool) -> Vec<NavLink> {
    if logged_in { vec![HOME, PROFILE, LOGOUT] } else { vec![HOME, LOGIN, REGISTER] }
}

/// Whether `href` should be highlighted at `pathname`. Home only matches exactly.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    let target = href.trim_end_matches('/');
    if target.is_empty() {
        return path.is_empty();
    }
    path == target || path.strip_prefix(target).is_some_and(|rest| rest.starts_with('/'))
}
