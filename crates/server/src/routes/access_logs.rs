//! Access history of a user.

use axum::{extract::{Path, State}, http::StatusCode};
use service::access_log_service;

use crate::{errors::JsonApiError, reply::Reply, state::ServerState};

#[utoipa::path(
    get, path = "/users/{cpf}/access-logs", tag = "users",
    params(("cpf" = String, Path, description = "User CPF")),
    responses(
        (status = 200, description = "Accesses, newest first", body = [crate::openapi::AccessLogDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>, Path(cpf): Path<String>) -> Result<Reply, JsonApiError> {
    let logs = access_log_service::list_by_user(&state.db, &cpf)
        .await
        .map_err(|e| JsonApiError::from_service(e, "list access logs"))?;
    Reply::ok(&logs)
}

#[utoipa::path(
    post, path = "/users/{cpf}/access-logs", tag = "users",
    params(("cpf" = String, Path, description = "User CPF")),
    responses(
        (status = 200, description = "Access recorded", body = crate::openapi::AccessLogDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn record(State(state): State<ServerState>, Path(cpf): Path<String>) -> Result<Reply, JsonApiError> {
    match access_log_service::record_access(&state.db, &cpf)
        .await
        .map_err(|e| JsonApiError::from_service(e, "record access"))?
    {
        Some(log) => Reply::ok(&log),
        None => Ok(Reply::status_only(StatusCode::NOT_FOUND)),
    }
}
