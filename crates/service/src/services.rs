//! Composition of every service from one `ModelRegistry`.

use std::sync::Arc;

use models::ModelRegistry;
use sea_orm::DatabaseConnection;

use crate::role::RoleService;
use crate::user::UserService;

#[derive(Clone)]
pub struct Services {
    pub roles: Arc<RoleService>,
    pub users: Arc<UserService>,
    /// Units and access logs go through free functions over the pool.
    pub db: DatabaseConnection,
}

impl Services {
    pub fn new(registry: &ModelRegistry) -> Self {
        Self {
            roles: Arc::new(RoleService::from_registry(registry)),
            users: Arc::new(UserService::from_registry(registry)),
            db: registry.db().clone(),
        }
    }
}
