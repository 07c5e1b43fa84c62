//! SSR host for the marketplace storefront.
//!
//! Serves the server-rendered Leptos app, the hydration bundle under `/pkg`,
//! and a health probe. All business data lives in the external marketplace
//! API; this process holds no state of its own.

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ServerError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, backend = client::net::api::backend_url(), "marketplace listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
