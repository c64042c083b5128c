//! Stub repositories for exercising handlers without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use models::{role, user};
use sea_orm::{DatabaseBackend, MockDatabase};
use service::errors::ServiceError;
use service::role::{RoleRepository, RoleService};
use service::user::{UserRepository, UserService};

use crate::state::ServerState;

#[derive(Default)]
struct Inner<T> {
    rows: Mutex<Vec<T>>,
    calls: Mutex<Vec<&'static str>>,
    fail_on: Mutex<Option<&'static str>>,
}

impl<T> Inner<T> {
    fn record(&self, op: &'static str) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(op);
        if *self.fail_on.lock().unwrap() == Some(op) {
            return Err(ServiceError::Db(format!("{op} exploded")));
        }
        Ok(())
    }
}

/// Role rows kept in insertion order; `fail_on` makes one operation error.
#[derive(Clone, Default)]
pub struct StubRoles {
    inner: Arc<Inner<role::Model>>,
}

impl StubRoles {
    pub fn with_rows(rows: Vec<role::Model>) -> Self {
        let stub = Self::default();
        *stub.inner.rows.lock().unwrap() = rows;
        stub
    }

    pub fn failing_on(op: &'static str) -> Self {
        Self::default().fail_on(op)
    }

    pub fn fail_on(self, op: &'static str) -> Self {
        *self.inner.fail_on.lock().unwrap() = Some(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoleRepository for StubRoles {
    async fn find_all(&self) -> Result<Vec<role::Model>, ServiceError> {
        self.inner.record("find_all")?;
        Ok(self.inner.rows.lock().unwrap().clone())
    }

    async fn find_one(&self, id_role: i32) -> Result<Option<role::Model>, ServiceError> {
        self.inner.record("find_one")?;
        Ok(self.inner.rows.lock().unwrap().iter().find(|r| r.id_role == id_role).cloned())
    }

    async fn create(&self, input: role::NewRole) -> Result<role::Model, ServiceError> {
        self.inner.record("create")?;
        let mut rows = self.inner.rows.lock().unwrap();
        let id_role = input.id_role.unwrap_or(rows.len() as i32 + 1);
        let model = role::Model {
            id_role,
            name: input.name,
            access_level: input.access_level,
            allowed_actions: input.allowed_actions,
        };
        rows.push(model.clone());
        Ok(model)
    }

    async fn update(&self, changes: role::RoleChanges, id_role: i32) -> Result<u64, ServiceError> {
        self.inner.record("update")?;
        let mut rows = self.inner.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id_role == id_role) else { return Ok(0) };
        if let Some(n) = changes.name { row.name = n; }
        if let Some(l) = changes.access_level { row.access_level = l; }
        if let Some(a) = changes.allowed_actions { row.allowed_actions = a; }
        Ok(1)
    }

    async fn destroy(&self, id_role: i32) -> Result<u64, ServiceError> {
        self.inner.record("destroy")?;
        let mut rows = self.inner.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id_role != id_role);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct StubUsers {
    inner: Arc<Inner<user::Model>>,
}

impl StubUsers {
    pub fn with_rows(rows: Vec<user::Model>) -> Self {
        let stub = Self::default();
        *stub.inner.rows.lock().unwrap() = rows;
        stub
    }

    pub fn failing_on(op: &'static str) -> Self {
        Self::default().fail_on(op)
    }

    pub fn fail_on(self, op: &'static str) -> Self {
        *self.inner.fail_on.lock().unwrap() = Some(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for StubUsers {
    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.inner.record("find_all")?;
        Ok(self.inner.rows.lock().unwrap().clone())
    }

    async fn find_by_role(&self, id_role: i32) -> Result<Vec<user::Model>, ServiceError> {
        self.inner.record("find_by_role")?;
        Ok(self.inner.rows.lock().unwrap().iter().filter(|u| u.id_role == id_role).cloned().collect())
    }

    async fn find_one(&self, cpf: &str) -> Result<Option<user::Model>, ServiceError> {
        self.inner.record("find_one")?;
        Ok(self.inner.rows.lock().unwrap().iter().find(|u| u.cpf == cpf).cloned())
    }

    async fn create(&self, input: user::NewUser) -> Result<user::Model, ServiceError> {
        self.inner.record("create")?;
        user::validate_cpf(&input.cpf)?;
        let model = user::Model {
            cpf: input.cpf,
            full_name: input.full_name,
            email: input.email,
            accepted: input.accepted,
            id_unit: input.id_unit,
            id_role: input.id_role,
        };
        self.inner.rows.lock().unwrap().push(model.clone());
        Ok(model)
    }

    async fn update(&self, changes: user::UserChanges, cpf: &str) -> Result<u64, ServiceError> {
        self.inner.record("update")?;
        let mut rows = self.inner.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|u| u.cpf == cpf) else { return Ok(0) };
        if let Some(n) = changes.full_name { row.full_name = n; }
        if let Some(e) = changes.email { row.email = e; }
        if let Some(a) = changes.accepted { row.accepted = a; }
        if let Some(u) = changes.id_unit { row.id_unit = u; }
        if let Some(r) = changes.id_role { row.id_role = r; }
        Ok(1)
    }

    async fn destroy(&self, cpf: &str) -> Result<u64, ServiceError> {
        self.inner.record("destroy")?;
        let mut rows = self.inner.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.cpf != cpf);
        Ok((before - rows.len()) as u64)
    }
}

pub fn state_with(roles: StubRoles, users: StubUsers) -> ServerState {
    ServerState {
        roles: Arc::new(RoleService::new(Arc::new(roles))),
        users: Arc::new(UserService::new(Arc::new(users))),
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    }
}

pub fn state_with_roles(roles: StubRoles) -> ServerState {
    state_with(roles, StubUsers::default())
}

pub fn state_with_users(users: StubUsers) -> ServerState {
    state_with(StubRoles::default(), users)
}

/// Stub role/user services; units and access logs hit `db`.
pub fn state_with_db(db: sea_orm::DatabaseConnection) -> ServerState {
    ServerState { db, ..state_with(StubRoles::default(), StubUsers::default()) }
}
