//! System API endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;

use cinelog_api::responses::HealthcheckResponse;

use crate::VERSION;
use crate::api::error::ApiError;
use crate::api::json::write_json;
use crate::state::AppState;

/// Report application status, operating environment and version
///
/// # Errors
/// Returns `ApiError` if the response cannot be serialized
pub async fn healthcheck(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let payload = HealthcheckResponse {
        status: "available".to_string(),
        environment: state.config.env.clone(),
        version: VERSION.to_string(),
    };

    write_json(StatusCode::OK, &payload, HeaderMap::new()).map_err(|err| {
        tracing::error!(error = %err, "failed to write healthcheck response");
        ApiError::server_error()
    })
}
