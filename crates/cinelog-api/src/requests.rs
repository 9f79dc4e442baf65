//! Request types for the API

use cinelog_core::Runtime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for creating a movie
///
/// Absent fields decode to their defaults; unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "107 mins")]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub genres: Vec<String>,
}
