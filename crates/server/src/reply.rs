//! Status + JSON body produced by a handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::errors::JsonApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Result<Self, JsonApiError> {
        let body = serde_json::to_value(body).map_err(|e| {
            error!(err = %e, "response serialization failed");
            JsonApiError::internal()
        })?;
        Ok(Self { status, body: Some(body) })
    }

    pub fn ok<T: Serialize + ?Sized>(body: &T) -> Result<Self, JsonApiError> {
        Self::json(StatusCode::OK, body)
    }

    /// 204 with an empty JSON array, the "nothing found" answer for lookups.
    pub fn no_content_empty() -> Self {
        Self { status: StatusCode::NO_CONTENT, body: Some(Value::Array(Vec::new())) }
    }

    pub fn status_only(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}
