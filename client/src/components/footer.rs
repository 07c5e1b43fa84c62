//! Site footer.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_wrap)]
fn current_year() -> Option<i32> {
    Some(js_sys::Date::new_0().get_full_year() as i32)
}

#[cfg(not(feature = "hydrate"))]
fn current_year() -> Option<i32> {
    None
}

#[component]
pub fn Footer() -> impl IntoView {
    // Filled in after hydration so server and client markup match.
    let year = RwSignal::new(None::<i32>);
    Effect::new(move || year.set(current_year()));

    view! {
        <footer class="footer">
            <span class="footer__brand">"Marketplace"</span>
            <span class="footer__tagline">"Buy and sell second-hand items near you."</span>
            <span class="footer__copy">
                {move || year.get().map(|y| format!("© {y}")).unwrap_or_default()}
            </span>
        </footer>
    }
}
