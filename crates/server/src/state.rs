use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::role::RoleService;
use service::user::UserService;
use service::Services;

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub roles: Arc<RoleService>,
    pub users: Arc<UserService>,
    pub db: DatabaseConnection,
}

impl From<Services> for ServerState {
    fn from(s: Services) -> Self {
        Self { roles: s.roles, users: s.users, db: s.db }
    }
}
