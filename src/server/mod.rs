//! HTTP surface for translation lookups.
//!
//! Routes:
//! - `GET /health`
//! - `GET /locales`
//! - `GET /translations/{locale}`
//! - `GET /translations/{locale}/{key}`
//!
//! The catalog is loaded before the listener binds and shared read-only
//! across handlers. Unknown routes, wrong methods and undecodable path
//! segments are answered with the same envelope as every other response.

pub mod envelope;
mod extract;
mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::TranslationCatalog;
use crate::config::Config;
use crate::error::Result;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TranslationCatalog>,
    pub service_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: TranslationCatalog, service_name: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            service_name: Arc::from(service_name),
        }
    }
}

/// Build the router without transport layers.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/locales", get(handlers::locales))
        .route(
            "/translations/{locale}",
            get(handlers::translations_for_locale),
        )
        .route(
            "/translations/{locale}/{key}",
            get(handlers::translation_by_key),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}

/// Load the catalog, bind, and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the address cannot be bound.
pub async fn serve(config: &Config) -> Result<()> {
    let catalog = TranslationCatalog::load(&config.translations_path)?;
    tracing::info!(
        locales = catalog.len(),
        path = %config.translations_path.display(),
        "Translation catalog loaded"
    );

    let app = create_router(AppState::new(catalog, &config.service_name))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(debug = config.debug, "listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
