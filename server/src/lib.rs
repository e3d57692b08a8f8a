//! Ledger and catalog service for the card kiosk: accounts keyed by the
//! reader's UID string, a product catalog, balance credits and purchases.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod scanner;
pub mod state;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.frontend_origin);

    Router::new()
        .merge(routes::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!("invalid frontend origin {origin:?}, allowing any");
            CorsLayer::permissive()
        }
    }
}
