use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use models::{user, user_access_log};
use crate::errors::ServiceError;

/// Record one access for `cpf`. `None` when the user does not exist.
pub async fn record_access(db: &DatabaseConnection, cpf: &str) -> Result<Option<user_access_log::Model>, ServiceError> {
    let owner = user::Entity::find_by_id(cpf.to_string())
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if owner.is_none() {
        return Ok(None);
    }
    let log = user_access_log::create(db, cpf).await?;
    info!(%cpf, id = %log.id, "recorded user access");
    Ok(Some(log))
}

/// Accesses of one user, newest first.
pub async fn list_by_user(db: &DatabaseConnection, cpf: &str) -> Result<Vec<user_access_log::Model>, ServiceError> {
    user_access_log::Entity::find()
        .filter(user_access_log::Column::Cpf.eq(cpf))
        .order_by_desc(user_access_log::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
