pub mod health;
pub mod waitlist;

use axum::{Router, routing::post};

use crate::adapters::http::app_state::AppState;

/// Path the landing page posts to. Kept from the original edge-function deployment.
pub const EDGE_FUNCTION_PATH: &str = "/functions/v1/sync-to-sheets";

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_router())
        .route(EDGE_FUNCTION_PATH, post(waitlist::join_waitlist))
        .merge(health::router())
}

fn api_router() -> Router<AppState> {
    Router::new().nest("/waitlist", waitlist::router())
}
