//! Health endpoints
//!
//! `/ping` and `/healthz` never touch storage; `/ping_db` does.

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::http::server::AppState;

/// GET /ping and GET /healthz
async fn alive() -> StatusCode {
    StatusCode::OK
}

/// GET /ping_db
async fn ping_db(State(state): State<AppState>) -> StatusCode {
    match state.store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "database ping failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(alive))
        .route("/healthz", get(alive))
        .route("/ping_db", get(ping_db))
}
