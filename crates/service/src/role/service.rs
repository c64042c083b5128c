use std::sync::Arc;

use models::role::{self, NewRole, RoleChanges};
use models::ModelRegistry;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::role::repository::{RoleRepository, SeaOrmRoleRepository};

/// Thin wrapper over the role table. "Not found" is `None`, never an error.
pub struct RoleService {
    repo: Arc<dyn RoleRepository>,
}

impl RoleService {
    pub fn new(repo: Arc<dyn RoleRepository>) -> Self { Self { repo } }

    pub fn from_registry(registry: &ModelRegistry) -> Self {
        Self::new(Arc::new(SeaOrmRoleRepository { db: registry.db().clone() }))
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<role::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_one_by_id(&self, id_role: i32) -> Result<Option<role::Model>, ServiceError> {
        self.repo.find_one(id_role).await
    }

    #[instrument(skip(self))]
    pub async fn create_role(&self, input: NewRole) -> Result<role::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id_role = created.id_role, "created role");
        Ok(created)
    }

    /// Update the role keyed by `id_role`, then read it back.
    ///
    /// Zero rows touched yields `None` and skips the re-fetch.
    #[instrument(skip(self))]
    pub async fn update_role(&self, changes: RoleChanges, id_role: i32) -> Result<Option<role::Model>, ServiceError> {
        if changes.is_empty() {
            return self.repo.find_one(id_role).await;
        }
        let rows = self.repo.update(changes, id_role).await?;
        if rows == 0 {
            info!(id_role, "role update matched no rows");
            return Ok(None);
        }
        self.repo.find_one(id_role).await
    }

    /// Returns whether a row was removed.
    #[instrument(skip(self))]
    pub async fn delete_role_by_id(&self, id_role: i32) -> Result<bool, ServiceError> {
        let rows = self.repo.destroy(id_role).await?;
        info!(id_role, rows, "deleted role");
        Ok(rows > 0)
    }
}
