pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::ats::handlers::handle_ats_check;
use crate::scrape::handlers::handle_scrape;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analysis", post(handle_analyze))
        .route("/api/v1/ats/check", post(handle_ats_check))
        .route("/api/v1/scrape", post(handle_scrape))
        .with_state(state)
}
