#![cfg(test)]
//! In-memory repositories that record which operations were called.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use models::{role, user};

use crate::errors::ServiceError;
use crate::role::RoleRepository;
use crate::user::UserRepository;

#[derive(Default)]
pub struct InMemoryRoleRepository {
    rows: Mutex<BTreeMap<i32, role::Model>>,
    calls: Mutex<Vec<&'static str>>,
    fail: bool,
}

impl InMemoryRoleRepository {
    pub fn with_rows(rows: Vec<role::Model>) -> Self {
        let map = rows.into_iter().map(|r| (r.id_role, r)).collect();
        Self { rows: Mutex::new(map), ..Default::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(op);
        if self.fail {
            return Err(ServiceError::Db("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_all(&self) -> Result<Vec<role::Model>, ServiceError> {
        self.record("find_all")?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_one(&self, id_role: i32) -> Result<Option<role::Model>, ServiceError> {
        self.record("find_one")?;
        Ok(self.rows.lock().unwrap().get(&id_role).cloned())
    }

    async fn create(&self, input: role::NewRole) -> Result<role::Model, ServiceError> {
        self.record("create")?;
        let mut rows = self.rows.lock().unwrap();
        let id_role = input.id_role.unwrap_or_else(|| rows.keys().max().copied().unwrap_or(0) + 1);
        let model = role::Model {
            id_role,
            name: input.name,
            access_level: input.access_level,
            allowed_actions: input.allowed_actions,
        };
        rows.insert(id_role, model.clone());
        Ok(model)
    }

    async fn update(&self, changes: role::RoleChanges, id_role: i32) -> Result<u64, ServiceError> {
        self.record("update")?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id_role) else { return Ok(0) };
        if let Some(n) = changes.name { row.name = n; }
        if let Some(l) = changes.access_level { row.access_level = l; }
        if let Some(a) = changes.allowed_actions { row.allowed_actions = a; }
        Ok(1)
    }

    async fn destroy(&self, id_role: i32) -> Result<u64, ServiceError> {
        self.record("destroy")?;
        Ok(self.rows.lock().unwrap().remove(&id_role).map_or(0, |_| 1))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<String, user::Model>>,
    calls: Mutex<Vec<&'static str>>,
}

impl InMemoryUserRepository {
    pub fn with_rows(rows: Vec<user::Model>) -> Self {
        let map = rows.into_iter().map(|u| (u.cpf.clone(), u)).collect();
        Self { rows: Mutex::new(map), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.calls.lock().unwrap().push("find_all");
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_role(&self, id_role: i32) -> Result<Vec<user::Model>, ServiceError> {
        self.calls.lock().unwrap().push("find_by_role");
        Ok(self.rows.lock().unwrap().values().filter(|u| u.id_role == id_role).cloned().collect())
    }

    async fn find_one(&self, cpf: &str) -> Result<Option<user::Model>, ServiceError> {
        self.calls.lock().unwrap().push("find_one");
        Ok(self.rows.lock().unwrap().get(cpf).cloned())
    }

    async fn create(&self, input: user::NewUser) -> Result<user::Model, ServiceError> {
        self.calls.lock().unwrap().push("create");
        let model = user::Model {
            cpf: input.cpf,
            full_name: input.full_name,
            email: input.email,
            accepted: input.accepted,
            id_unit: input.id_unit,
            id_role: input.id_role,
        };
        self.rows.lock().unwrap().insert(model.cpf.clone(), model.clone());
        Ok(model)
    }

    async fn update(&self, changes: user::UserChanges, cpf: &str) -> Result<u64, ServiceError> {
        self.calls.lock().unwrap().push("update");
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(cpf) else { return Ok(0) };
        if let Some(n) = changes.full_name { row.full_name = n; }
        if let Some(e) = changes.email { row.email = e; }
        if let Some(a) = changes.accepted { row.accepted = a; }
        if let Some(u) = changes.id_unit { row.id_unit = u; }
        if let Some(r) = changes.id_role { row.id_role = r; }
        Ok(1)
    }

    async fn destroy(&self, cpf: &str) -> Result<u64, ServiceError> {
        self.calls.lock().unwrap().push("destroy");
        Ok(self.rows.lock().unwrap().remove(cpf).map_or(0, |_| 1))
    }
}
