use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::role::{self, NewRole, RoleChanges};

use crate::errors::ServiceError;

/// Single-table operations on `role`, one ORM call each.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<role::Model>, ServiceError>;
    async fn find_one(&self, id_role: i32) -> Result<Option<role::Model>, ServiceError>;
    async fn create(&self, input: NewRole) -> Result<role::Model, ServiceError>;
    /// Returns the number of rows the update touched.
    async fn update(&self, changes: RoleChanges, id_role: i32) -> Result<u64, ServiceError>;
    /// Returns the number of rows removed.
    async fn destroy(&self, id_role: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRoleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn find_all(&self) -> Result<Vec<role::Model>, ServiceError> {
        role::Entity::find()
            .order_by_asc(role::Column::IdRole)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_one(&self, id_role: i32) -> Result<Option<role::Model>, ServiceError> {
        role::Entity::find()
            .filter(role::Column::IdRole.eq(id_role))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, input: NewRole) -> Result<role::Model, ServiceError> {
        Ok(role::create(&self.db, input).await?)
    }

    async fn update(&self, changes: RoleChanges, id_role: i32) -> Result<u64, ServiceError> {
        let am = changes.into_active_model()?;
        let res = role::Entity::update_many()
            .set(am)
            .filter(role::Column::IdRole.eq(id_role))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn destroy(&self, id_role: i32) -> Result<u64, ServiceError> {
        let res = role::Entity::delete_many()
            .filter(role::Column::IdRole.eq(id_role))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }
}
