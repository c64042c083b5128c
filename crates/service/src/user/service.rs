use std::sync::Arc;

use models::user::{self, NewUser, UserChanges};
use models::ModelRegistry;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::user::repository::{SeaOrmUserRepository, UserRepository};

/// Same shape as `RoleService`, keyed by CPF.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    pub fn from_registry(registry: &ModelRegistry) -> Self {
        Self::new(Arc::new(SeaOrmUserRepository { db: registry.db().clone() }))
    }

    pub async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Users holding the given role.
    pub async fn find_all_by_role(&self, id_role: i32) -> Result<Vec<user::Model>, ServiceError> {
        self.repo.find_by_role(id_role).await
    }

    pub async fn find_one_by_cpf(&self, cpf: &str) -> Result<Option<user::Model>, ServiceError> {
        self.repo.find_one(cpf).await
    }

    #[instrument(skip(self, input), fields(cpf = %input.cpf))]
    pub async fn create_user(&self, input: NewUser) -> Result<user::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(cpf = %created.cpf, id_role = created.id_role, "created user");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update_user(&self, changes: UserChanges, cpf: &str) -> Result<Option<user::Model>, ServiceError> {
        if changes.is_empty() {
            return self.repo.find_one(cpf).await;
        }
        if self.repo.update(changes, cpf).await? == 0 {
            return Ok(None);
        }
        self.repo.find_one(cpf).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user_by_cpf(&self, cpf: &str) -> Result<bool, ServiceError> {
        Ok(self.repo.destroy(cpf).await? > 0)
    }
}
