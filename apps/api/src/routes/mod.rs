pub mod health;
pub mod page;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::comparison::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    Router::new()
        .route("/", get(page::index_page))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/comparisons",
            post(handlers::handle_create_comparison),
        )
        .layer(body_limit)
        .with_state(state)
}
