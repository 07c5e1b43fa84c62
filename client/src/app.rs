//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    home::HomePage, login::LoginPage, logout::LogoutPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::{SessionState, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Debug builds log the size of both collections once at startup.
#[cfg(all(feature = "hydrate", debug_assertions))]
fn log_backend_snapshot() {
    leptos::task::spawn_local(async {
        let (listings, users) =
            futures::join!(crate::net::api::fetch_listings(), crate::net::api::fetch_users());
        match (listings, users) {
            (Ok(listings), Ok(users)) => {
                log::debug!("backend snapshot: {} listings, {} users", listings.len(), users.len());
            }
            (Err(e), _) | (_, Err(e)) => log::debug!("backend snapshot failed: {e}"),
        }
    });
}

/// Root application component.
///
/// Provides the session store and its reactive mirror, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let session = RwSignal::new(SessionState::default());
    provide_context(store.clone());
    provide_context(session);

    // Storage is only readable in the browser; effects never run during SSR.
    Effect::new(move || {
        session.set(SessionState::loaded(&store));
    });

    #[cfg(all(feature = "hydrate", debug_assertions))]
    log_backend_snapshot();

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Marketplace"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("logout") view=LogoutPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
