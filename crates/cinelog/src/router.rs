//! HTTP router configuration

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::{error, movies, system};
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // System endpoints
        .route("/v1/healthcheck", get(system::healthcheck))
        // Movie endpoints
        .route("/v1/movies", post(movies::create_movie))
        .route("/v1/movies/{id}", get(movies::show_movie))
        // JSON error bodies for unmatched routes and unsupported methods
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        // State
        .with_state(state)
}
