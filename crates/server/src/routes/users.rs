use axum::{extract::{Path, State}, http::StatusCode, Json};
use common::types::Message;
use models::user::{NewUser, UserChanges};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::JsonApiError, reply::Reply, state::ServerState};

pub const EMPTY_USERS_MESSAGE: &str = "Não Existe usuário";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub cpf: String,
    #[serde(flatten)]
    pub changes: UserChanges,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserKey {
    pub cpf: String,
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users", body = [crate::openapi::UserDoc]),
        (status = 204, description = "No user registered", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn index(State(state): State<ServerState>) -> Result<Reply, JsonApiError> {
    let users = state.users.find_all().await.map_err(|e| JsonApiError::from_service(e, "list users"))?;
    if users.is_empty() {
        return Reply::json(StatusCode::NO_CONTENT, &Message::new(EMPTY_USERS_MESSAGE));
    }
    info!(count = users.len(), "list users");
    Reply::ok(&users)
}

#[utoipa::path(
    get, path = "/users/{cpf}", tag = "users",
    params(("cpf" = String, Path, description = "User CPF, 11 digits")),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserDoc),
        (status = 204, description = "No such user; body is []"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_cpf(State(state): State<ServerState>, Path(cpf): Path<String>) -> Result<Reply, JsonApiError> {
    match state.users.find_one_by_cpf(&cpf).await.map_err(|e| JsonApiError::from_service(e, "get user"))? {
        Some(user) => Reply::ok(&user),
        None => Ok(Reply::no_content_empty()),
    }
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UserDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn store(State(state): State<ServerState>, Json(input): Json<NewUser>) -> Result<Reply, JsonApiError> {
    let created = state.users.create_user(input).await.map_err(|e| JsonApiError::from_service(e, "create user"))?;
    Reply::ok(&created)
}

#[utoipa::path(
    put, path = "/users", tag = "users",
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 204, description = "No such user; body is []"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_user(State(state): State<ServerState>, Json(input): Json<UpdateUserInput>) -> Result<Reply, JsonApiError> {
    let found = state.users.find_one_by_cpf(&input.cpf).await.map_err(|e| JsonApiError::from_service(e, "get user"))?;
    if found.is_none() {
        return Ok(Reply::no_content_empty());
    }
    let updated = state
        .users
        .update_user(input.changes, &input.cpf)
        .await
        .map_err(|e| JsonApiError::from_service(e, "update user"))?;
    match updated {
        Some(user) => Reply::ok(&user),
        None => Ok(Reply::no_content_empty()),
    }
}

#[utoipa::path(
    delete, path = "/users", tag = "users",
    request_body = crate::openapi::UserKeyDoc,
    responses(
        (status = 200, description = "Deleted; body is the removed user", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Json(key): Json<UserKey>) -> Result<Reply, JsonApiError> {
    let Some(user) = state.users.find_one_by_cpf(&key.cpf).await.map_err(|e| JsonApiError::from_service(e, "get user"))? else {
        return Ok(Reply::status_only(StatusCode::NOT_FOUND));
    };
    state.users.delete_user_by_cpf(&key.cpf).await.map_err(|e| JsonApiError::from_service(e, "delete user"))?;
    info!(cpf = %user.cpf, "deleted user");
    Reply::ok(&user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{state_with_users, StubUsers};
    use models::user;
    use serde_json::json;

    fn maria() -> user::Model {
        user::Model {
            cpf: "12345678901".into(),
            full_name: "Maria Souza".into(),
            email: "maria@tj.jus.br".into(),
            accepted: true,
            id_unit: 1,
            id_role: 2,
        }
    }

    #[tokio::test]
    async fn index_without_users_returns_message() {
        let reply = index(State(state_with_users(StubUsers::default()))).await.unwrap();
        assert_eq!(reply.status, StatusCode::NO_CONTENT);
        assert_eq!(reply.body, Some(json!({ "message": "Não Existe usuário" })));
    }

    #[tokio::test]
    async fn index_lists_users_in_camel_case() {
        let reply = index(State(state_with_users(StubUsers::with_rows(vec![maria()])))).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        let body = reply.body.unwrap();
        assert_eq!(body[0]["fullName"], "Maria Souza");
        assert_eq!(body[0]["idRole"], 2);
    }

    #[tokio::test]
    async fn get_by_cpf_missing_is_204_with_empty_array() {
        let reply = get_by_cpf(State(state_with_users(StubUsers::default())), Path("00000000000".into())).await.unwrap();
        assert_eq!(reply.status, StatusCode::NO_CONTENT);
        assert_eq!(reply.body, Some(json!([])));
    }

    #[tokio::test]
    async fn store_with_malformed_cpf_is_500() {
        let input = NewUser {
            cpf: "123".into(),
            full_name: "Maria".into(),
            email: "maria@tj.jus.br".into(),
            accepted: false,
            id_unit: 1,
            id_role: 1,
        };
        let stub = StubUsers::default();
        let err = store(State(state_with_users(stub.clone())), Json(input)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), json!({ "error": "Internal Server Error" }));
        assert_eq!(stub.calls(), vec!["create"]);
    }

    #[tokio::test]
    async fn update_missing_user_skips_update() {
        let stub = StubUsers::default();
        let input = UpdateUserInput { cpf: maria().cpf, changes: UserChanges { accepted: Some(true), ..Default::default() } };
        let reply = update_user(State(state_with_users(stub.clone())), Json(input)).await.unwrap();
        assert_eq!(reply.status, StatusCode::NO_CONTENT);
        assert_eq!(stub.calls(), vec!["find_one"]);
    }

    #[tokio::test]
    async fn update_existing_user_returns_refetched_row() {
        let stub = StubUsers::with_rows(vec![maria()]);
        let input = UpdateUserInput { cpf: maria().cpf, changes: UserChanges { accepted: Some(false), ..Default::default() } };
        let reply = update_user(State(state_with_users(stub.clone())), Json(input)).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body.unwrap()["accepted"], false);
        assert_eq!(stub.calls(), vec!["find_one", "update", "find_one"]);
    }

    #[tokio::test]
    async fn delete_missing_user_is_404() {
        let reply = delete(State(state_with_users(StubUsers::default())), Json(UserKey { cpf: "1".into() })).await.unwrap();
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body, None);
    }

    #[tokio::test]
    async fn delete_existing_user_returns_original() {
        let stub = StubUsers::with_rows(vec![maria()]);
        let reply = delete(State(state_with_users(stub.clone())), Json(UserKey { cpf: maria().cpf })).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, Some(json!(maria())));
        assert_eq!(stub.calls(), vec!["find_one", "destroy"]);
    }

    #[tokio::test]
    async fn lookup_failure_is_500() {
        let err = get_by_cpf(State(state_with_users(StubUsers::failing_on("find_one"))), Path(maria().cpf)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), json!({ "error": "Internal Server Error" }));
    }
    #[tokio::test]
    async fn update_lookup_failure_is_500() {
        let stub = StubUsers::failing_on("find_one");
        let input = UpdateUserInput { cpf: maria().cpf, changes: UserChanges { accepted: Some(true), ..Default::default() } };
        let err = update_user(State(state_with_users(stub.clone())), Json(input)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(stub.calls(), vec!["find_one"]);
    }

    #[tokio::test]
    async fn update_failure_is_500() {
        let stub = StubUsers::with_rows(vec![maria()]).fail_on("update");
        let input = UpdateUserInput { cpf: maria().cpf, changes: UserChanges { accepted: Some(false), ..Default::default() } };
        let err = update_user(State(state_with_users(stub.clone())), Json(input)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(stub.calls(), vec!["find_one", "update"]);
    }

    #[tokio::test]
    async fn delete_destroy_failure_is_500() {
        let stub = StubUsers::with_rows(vec![maria()]).fail_on("destroy");
        let err = delete(State(state_with_users(stub.clone())), Json(UserKey { cpf: maria().cpf })).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(stub.calls(), vec!["find_one", "destroy"]);
    }
}
