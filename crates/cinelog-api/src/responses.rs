//! Response types for the API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Healthcheck payload reporting liveness and build metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthcheckResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
}

/// JSON envelope carried by every error reply
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
