//! Movie API endpoints

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use chrono::Utc;

use cinelog_api::requests::CreateMovieRequest;
use cinelog_core::{CoreError, Movie, Runtime};

use crate::api::error::ApiError;
use crate::api::json::{JsonBody, write_json};

/// Parse a route segment into a positive movie identifier
fn read_id_param(raw: &str) -> Result<i64, CoreError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(CoreError::InvalidIdParameter),
    }
}

/// Create a new movie
///
/// Stub: decodes the input and echoes it back as plain text, nothing is
/// stored yet.
pub async fn create_movie(JsonBody(input): JsonBody<CreateMovieRequest>) -> String {
    format!("{input:?}\n")
}

/// Show a single movie
///
/// Stub: any valid id returns the same placeholder record.
///
/// # Errors
/// Returns `ApiError` if the id is invalid or the response cannot be serialized
pub async fn show_movie(Path(id): Path<String>) -> Result<Response, ApiError> {
    let id = read_id_param(&id).map_err(|_| ApiError::not_found())?;

    let movie = Movie {
        id,
        created_at: Utc::now(),
        title: "Casablanca".to_string(),
        year: Some(2002),
        runtime: Some(Runtime(102)),
        genres: vec![
            "drama".to_string(),
            "romance".to_string(),
            "war".to_string(),
        ],
        version: 1,
    };

    write_json(StatusCode::OK, &movie, HeaderMap::new()).map_err(|err| {
        tracing::error!(error = %err, "failed to write movie response");
        ApiError::server_error()
    })
}
