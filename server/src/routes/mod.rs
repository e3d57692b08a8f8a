mod accounts;
mod payments;
mod products;
mod scan;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the API router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/accounts", accounts::router().merge(payments::router()))
        .nest("/products", products::router())
        .route("/scan", get(scan::scan))
}
