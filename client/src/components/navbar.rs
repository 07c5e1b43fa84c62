//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionState;
use crate::util::nav::{is_active, nav_links};

/// Brand plus session-dependent links, collapsing into a menu on small screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after navigating.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        let current = pathname.get();
        nav_links(session.get().is_logged_in())
            .into_iter()
            .map(|link| {
                let active = is_active(&current, link.href);
                view! {
                    <a class="navbar__link" class:navbar__link--active=active href=link.href>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Marketplace"</a>
            <button
                class="navbar__toggle"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {links}
            </nav>
        </header>
    }
}
