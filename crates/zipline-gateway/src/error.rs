use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};
use zipline_core::{ShortenerError, StorageError};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-terminal errors surfaced by the HTTP front door.
///
/// The three kinds stay distinct all the way to the wire so clients can
/// tell a bad request from a missing mapping from a broken backend.
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameter missing, empty, or unparsable.
    MalformedRequest(String),
    /// No mapping exists for the requested short code.
    NotFound(String),
    /// The registry backend failed.
    Storage(StorageError),
}

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::EmptyUrl | ShortenerError::InvalidShortCode(_) => {
                Self::MalformedRequest(err.to_string())
            }
            ShortenerError::Storage(storage) => Self::Storage(storage),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::MalformedRequest(message) => {
                warn!(%message, "malformed request");
                (StatusCode::BAD_REQUEST, "malformed_request", message)
            }
            ApiError::NotFound(code) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("no long url found for short code '{}'", code),
            ),
            ApiError::Storage(storage) => {
                error!(error = %storage, "registry backend failure");
                (StatusCode::BAD_GATEWAY, "storage_failure", storage.to_string())
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_request_maps_to_400() {
        let response = ApiError::MalformedRequest("missing longUrl".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("dmzKek".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_maps_to_502() {
        let response =
            ApiError::Storage(StorageError::Unavailable("backend down".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn shortener_errors_split_into_distinct_kinds() {
        assert!(matches!(
            ApiError::from(ShortenerError::EmptyUrl),
            ApiError::MalformedRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ShortenerError::Storage(StorageError::Timeout("t".into()))),
            ApiError::Storage(_)
        ));
    }
}
