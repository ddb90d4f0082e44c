use crate::PortalError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// JSON error returned by the API, serialised as `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: message.into(),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Source details stay in the log; callers only learn that the fetch failed.
impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        if err.is_fetch_failure() {
            error!("ERROR fetching apps: {}", err);
            Self::internal("failed to fetch apps")
        } else {
            error!("Internal error: {}", err);
            Self::internal("internal error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_hides_details() {
        let err = ApiError::from(PortalError::SourceUnavailable("token expired".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "failed to fetch apps");
    }

    #[test]
    fn test_malformed_source_is_a_fetch_failure() {
        let err = ApiError::from(PortalError::MalformedSource {
            path: "config.yaml".to_string(),
            reason: "bad indent".to_string(),
        });
        assert_eq!(err.body.error, "failed to fetch apps");
    }
}
