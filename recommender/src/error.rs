use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CommonError),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Feature length mismatch: got {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("track_id '{0}' not found in catalog")]
    TrackNotFound(String),

    #[error("Provide either 'track_id' or 'features' in the request payload")]
    MissingInput,
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            EngineError::UnsupportedContentType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_content_type",
                self.to_string(),
            ),
            EngineError::DimensionMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "dimension_mismatch",
                self.to_string(),
            ),
            EngineError::TrackNotFound(_) => {
                (StatusCode::NOT_FOUND, "track_not_found", self.to_string())
            }
            EngineError::MissingInput => {
                (StatusCode::BAD_REQUEST, "missing_input", self.to_string())
            }
            EngineError::Json(_) => (StatusCode::BAD_REQUEST, "invalid_payload", self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                self.to_string(),
            ),
        };

        let body = Json(serde_json::json!({
            "error": error_code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Feature length mismatch: got 3, expected 2");

        let err = EngineError::TrackNotFound("z".to_string());
        assert_eq!(err.to_string(), "track_id 'z' not found in catalog");

        let err = EngineError::MissingInput;
        assert_eq!(
            err.to_string(),
            "Provide either 'track_id' or 'features' in the request payload"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EngineError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_common() {
        let common_err = CommonError::MalformedCatalog("ragged rows".to_string());
        let err: EngineError = common_err.into();
        assert!(err.to_string().contains("Malformed catalog"));
    }

    #[test]
    fn test_error_unsupported_content_type_status() {
        let err = EngineError::UnsupportedContentType("text/plain".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_error_dimension_mismatch_status() {
        let err = EngineError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_track_not_found_status() {
        let err = EngineError::TrackNotFound("z".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_missing_input_status() {
        let err = EngineError::MissingInput;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_internal_status() {
        let err = EngineError::Catalog(CommonError::MalformedCatalog("bad".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
