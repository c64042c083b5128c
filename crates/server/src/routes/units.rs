use axum::{extract::{Path, State}, http::StatusCode, Json};
use common::types::Message;
use models::unit::NewUnit;
use service::unit_service;
use tracing::info;

use crate::{errors::JsonApiError, reply::Reply, state::ServerState};

pub const EMPTY_UNITS_MESSAGE: &str = "Não Existe unidade";

#[utoipa::path(
    get, path = "/units", tag = "units",
    responses(
        (status = 200, description = "All units, ordered by name", body = [crate::openapi::UnitDoc]),
        (status = 204, description = "No unit registered", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn index(State(state): State<ServerState>) -> Result<Reply, JsonApiError> {
    let units = unit_service::list_units(&state.db).await.map_err(|e| JsonApiError::from_service(e, "list units"))?;
    if units.is_empty() {
        return Reply::json(StatusCode::NO_CONTENT, &Message::new(EMPTY_UNITS_MESSAGE));
    }
    info!(count = units.len(), "list units");
    Reply::ok(&units)
}

#[utoipa::path(
    get, path = "/units/{id}", tag = "units",
    params(("id" = i32, Path, description = "Unit id")),
    responses(
        (status = 200, description = "Unit found", body = crate::openapi::UnitDoc),
        (status = 204, description = "No such unit; body is []"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_id(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Reply, JsonApiError> {
    match unit_service::get_unit(&state.db, id).await.map_err(|e| JsonApiError::from_service(e, "get unit"))? {
        Some(unit) => Reply::ok(&unit),
        None => Ok(Reply::no_content_empty()),
    }
}

#[utoipa::path(
    post, path = "/units", tag = "units",
    request_body = crate::openapi::NewUnitDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UnitDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn store(State(state): State<ServerState>, Json(input): Json<NewUnit>) -> Result<Reply, JsonApiError> {
    let created = unit_service::create_unit(&state.db, input).await.map_err(|e| JsonApiError::from_service(e, "create unit"))?;
    info!(id_unit = created.id_unit, "created unit");
    Reply::ok(&created)
}
