use std::any::Any;
use std::io;

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use giggle_store::RepositoryError;
use giggle_types::api::ErrorBody;
use thiserror::Error;
use tracing::{error, warn};

use crate::validation::ValidationError;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Every way a request can fail, mapped to a status and `{error, message}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request body contains invalid JSON")]
    MalformedBody,

    #[error("cannot {method} {path}")]
    RouteNotFound { method: Method, path: String },

    #[error("submission {0} not found")]
    SubmissionNotFound(String),

    /// A persistence failure nobody handled closer to the request.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A failure a handler already described for the client.
    #[error("{0}")]
    Internal(&'static str),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::RouteNotFound { .. } | Self::SubmissionNotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(_) | Self::Internal(_) | Self::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(e) => ErrorBody::new("Validation failed", e.to_string()),
            Self::MalformedBody => {
                ErrorBody::new("Invalid JSON", "Request body contains invalid JSON")
            }
            Self::RouteNotFound { method, path } => {
                ErrorBody::new("Route not found", format!("Cannot {method} {path}"))
            }
            Self::SubmissionNotFound(id) => {
                ErrorBody::new("Submission not found", format!("No submission with id {id}"))
            }
            Self::Repository(e) => match e.io_kind() {
                Some(io::ErrorKind::NotFound) => {
                    ErrorBody::new("File not found", "Required data file is missing")
                }
                Some(io::ErrorKind::PermissionDenied) => {
                    ErrorBody::new("Permission denied", "Cannot access required files")
                }
                _ => unexpected_body(),
            },
            Self::Internal(message) => ErrorBody::new(INTERNAL_SERVER_ERROR, *message),
            Self::Unexpected(_) => unexpected_body(),
        }
    }
}

fn unexpected_body() -> ErrorBody {
    ErrorBody::new(INTERNAL_SERVER_ERROR, "An unexpected error occurred")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Repository(e) => error!("Unhandled error: {}: {}", e, e.store_error()),
            _ if status.is_server_error() => error!("Request failed: {}", self),
            _ => warn!("Rejected request ({}): {}", status.as_u16(), self),
        }

        (status, Json(self.body())).into_response()
    }
}

/// Panic handler for `CatchPanicLayer`: answer with the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Unexpected(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use giggle_store::StoreError;

    use super::*;

    fn store_failure(kind: io::ErrorKind) -> ApiError {
        ApiError::Repository(RepositoryError::Fetch(StoreError::Read {
            path: "data/submissions.json".into(),
            source: io::Error::from(kind),
        }))
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ApiError::from(ValidationError::VideoUrl);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ErrorBody::new("Validation failed", "videoUrl is required and must be a string")
        );
    }

    #[test]
    fn malformed_body() {
        assert_eq!(ApiError::MalformedBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MalformedBody.body().error, "Invalid JSON");
    }

    #[test]
    fn route_not_found_names_method_and_path() {
        let err = ApiError::RouteNotFound {
            method: Method::GET,
            path: "/nope".into(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), ErrorBody::new("Route not found", "Cannot GET /nope"));
    }

    #[test]
    fn store_failures_map_by_io_kind() {
        let err = store_failure(io::ErrorKind::NotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            ErrorBody::new("File not found", "Required data file is missing")
        );

        let err = store_failure(io::ErrorKind::PermissionDenied);
        assert_eq!(
            err.body(),
            ErrorBody::new("Permission denied", "Cannot access required files")
        );

        let err = store_failure(io::ErrorKind::Other);
        assert_eq!(
            err.body(),
            ErrorBody::new("Internal server error", "An unexpected error occurred")
        );
    }

    #[test]
    fn internal_keeps_handler_message() {
        let err = ApiError::Internal("Failed to create submission");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            ErrorBody::new("Internal server error", "Failed to create submission")
        );
    }

    #[test]
    fn panics_become_generic_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
