use axum::{extract::{Path, State}, http::StatusCode, Json};
use common::types::Message;
use models::role::{NewRole, RoleChanges};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::JsonApiError, reply::Reply, state::ServerState};

pub const EMPTY_ROLES_MESSAGE: &str = "Não Existe cargo";

/// Update body: the key plus any subset of fields to replace.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleInput {
    pub id_role: i32,
    #[serde(flatten)]
    pub changes: RoleChanges,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleKey {
    pub id_role: i32,
}

#[utoipa::path(
    get, path = "/roles", tag = "roles",
    responses(
        (status = 200, description = "All roles", body = [crate::openapi::RoleDoc]),
        (status = 204, description = "No role registered", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn index(State(state): State<ServerState>) -> Result<Reply, JsonApiError> {
    let roles = state.roles.find_all().await.map_err(|e| JsonApiError::from_service(e, "list roles"))?;
    if roles.is_empty() {
        return Reply::json(StatusCode::NO_CONTENT, &Message::new(EMPTY_ROLES_MESSAGE));
    }
    info!(count = roles.len(), "list roles");
    Reply::ok(&roles)
}

#[utoipa::path(
    get, path = "/roles/{id}", tag = "roles",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Role found", body = crate::openapi::RoleDoc),
        (status = 204, description = "No such role; body is []"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_id(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Reply, JsonApiError> {
    match state.roles.find_one_by_id(id).await.map_err(|e| JsonApiError::from_service(e, "get role"))? {
        Some(role) => Reply::ok(&role),
        None => Ok(Reply::no_content_empty()),
    }
}

#[utoipa::path(
    post, path = "/roles", tag = "roles",
    request_body = crate::openapi::NewRoleDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::RoleDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn store(State(state): State<ServerState>, Json(input): Json<NewRole>) -> Result<Reply, JsonApiError> {
    let created = state.roles.create_role(input).await.map_err(|e| JsonApiError::from_service(e, "create role"))?;
    Reply::ok(&created)
}

/// Look the role up first; a missing role answers 204 without attempting the update.
#[utoipa::path(
    put, path = "/roles", tag = "roles",
    request_body = crate::openapi::UpdateRoleDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::RoleDoc),
        (status = 204, description = "No such role; body is []"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_role(State(state): State<ServerState>, Json(input): Json<UpdateRoleInput>) -> Result<Reply, JsonApiError> {
    let found = state.roles.find_one_by_id(input.id_role).await.map_err(|e| JsonApiError::from_service(e, "get role"))?;
    if found.is_none() {
        return Ok(Reply::no_content_empty());
    }
    let updated = state
        .roles
        .update_role(input.changes, input.id_role)
        .await
        .map_err(|e| JsonApiError::from_service(e, "update role"))?;
    match updated {
        Some(role) => {
            info!(id_role = role.id_role, "updated role");
            Reply::ok(&role)
        }
        // removed between lookup and update
        None => Ok(Reply::no_content_empty()),
    }
}

/// Replies with the record as it was before removal.
#[utoipa::path(
    delete, path = "/roles", tag = "roles",
    request_body = crate::openapi::RoleKeyDoc,
    responses(
        (status = 200, description = "Deleted; body is the removed role", body = crate::openapi::RoleDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Json(key): Json<RoleKey>) -> Result<Reply, JsonApiError> {
    let Some(role) = state.roles.find_one_by_id(key.id_role).await.map_err(|e| JsonApiError::from_service(e, "get role"))? else {
        return Ok(Reply::status_only(StatusCode::NOT_FOUND));
    };
    state.roles.delete_role_by_id(key.id_role).await.map_err(|e| JsonApiError::from_service(e, "delete role"))?;
    info!(id_role = role.id_role, "deleted role");
    Reply::ok(&role)
}

#[utoipa::path(
    get, path = "/roles/{id}/users", tag = "roles",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Users holding the role", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn users_of_role(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Reply, JsonApiError> {
    let users = state.users.find_all_by_role(id).await.map_err(|e| JsonApiError::from_service(e, "list role users"))?;
    Reply::ok(&users)
}
