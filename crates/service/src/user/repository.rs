use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::user::{self, NewUser, UserChanges};

use crate::errors::ServiceError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn find_by_role(&self, id_role: i32) -> Result<Vec<user::Model>, ServiceError>;
    async fn find_one(&self, cpf: &str) -> Result<Option<user::Model>, ServiceError>;
    async fn create(&self, input: NewUser) -> Result<user::Model, ServiceError>;
    async fn update(&self, changes: UserChanges, cpf: &str) -> Result<u64, ServiceError>;
    async fn destroy(&self, cpf: &str) -> Result<u64, ServiceError>;
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        user::Entity::find()
            .order_by_asc(user::Column::FullName)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_role(&self, id_role: i32) -> Result<Vec<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(user::Column::IdRole.eq(id_role))
            .order_by_asc(user::Column::FullName)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_one(&self, cpf: &str) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(cpf.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, input: NewUser) -> Result<user::Model, ServiceError> {
        Ok(user::create(&self.db, input).await?)
    }

    async fn update(&self, changes: UserChanges, cpf: &str) -> Result<u64, ServiceError> {
        let am = changes.into_active_model()?;
        let res = user::Entity::update_many()
            .set(am)
            .filter(user::Column::Cpf.eq(cpf))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn destroy(&self, cpf: &str) -> Result<u64, ServiceError> {
        let res = user::Entity::delete_by_id(cpf.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }
}
