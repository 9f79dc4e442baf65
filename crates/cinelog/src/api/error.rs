//! API error responses

use axum::{
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};

use cinelog_api::responses::ErrorResponse;

use crate::api::json::write_json;

/// Error reply carrying a status code and a user-facing message
///
/// Rendering goes through [`IntoResponse`], producing the standard
/// `{"error": "..."}` envelope.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// 400 with a caller-supplied message, used for request decode failures
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 404 for missing resources and unparseable id parameters
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "the requested resource could not be found".to_string(),
        }
    }

    /// 405 naming the rejected method
    pub fn method_not_allowed(method: &Method) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: format!("the {method} method is not supported for this resource"),
        }
    }

    /// Generic 500; the underlying cause is logged where it happens
    pub fn server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "the server encountered a problem and could not process your request"
                .to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.message,
        };
        match write_json(self.status, &payload, HeaderMap::new()) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "failed to write error response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Fallback for matched routes hit with an unsupported method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(&method)
}
