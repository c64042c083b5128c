use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error reply with an `{"error": ...}` body.
///
/// Service failures never carry their detail to the client; it is logged instead.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str) -> Self {
        Self { status, error }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// Every rejection from a service call for operation `op` answers 500.
    pub fn from_service(err: ServiceError, op: &'static str) -> Self {
        if err.is_validation() {
            warn!(err = %err, op, "service call rejected input");
        } else {
            error!(err = %err, op, "service call failed");
        }
        Self::internal()
    }

    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.error })
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
