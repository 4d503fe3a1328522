use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON body of every error response: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a handler can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client input error (missing or malformed field) → 400.
    BadRequest(String),
    /// Unknown route or resource → 404.
    NotFound,
    /// Unhandled fault → 500.
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        let error = match self {
            ApiError::BadRequest(message) => message,
            ApiError::NotFound => "Not found".to_string(),
            ApiError::Internal => "Internal server error".to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
