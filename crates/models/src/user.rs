use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Iterable, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::registry::Association;
use crate::{role, unit, user_access_log};

/// A person with access to the system, keyed by CPF (11 digits).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cpf: String,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub accepted: bool,
    pub id_unit: i32,
    pub id_role: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Role,
    Unit,
    UserAccessLog,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Role => Entity::belongs_to(role::Entity).from(Column::IdRole).to(role::Column::IdRole).into(),
            Relation::Unit => Entity::belongs_to(unit::Entity).from(Column::IdUnit).to(unit::Column::IdUnit).into(),
            Relation::UserAccessLog => Entity::has_many(user_access_log::Entity).into(),
        }
    }
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<user_access_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAccessLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn associations() -> Vec<Association> {
    Relation::iter()
        .map(|rel| match rel {
            Relation::Role => Association::belongs_to(Entity, role::Entity),
            Relation::Unit => Association::belongs_to(Entity, unit::Entity),
            Relation::UserAccessLog => Association::has_many(Entity, user_access_log::Entity),
        })
        .collect()
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub cpf: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub accepted: bool,
    pub id_unit: i32,
    pub id_role: i32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChanges {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub accepted: Option<bool>,
    #[serde(default)]
    pub id_unit: Option<i32>,
    #[serde(default)]
    pub id_role: Option<i32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.accepted.is_none()
            && self.id_unit.is_none()
            && self.id_role.is_none()
    }

    pub fn into_active_model(self) -> Result<ActiveModel, errors::ModelError> {
        let mut am = ActiveModel {
            cpf: NotSet,
            full_name: NotSet,
            email: NotSet,
            accepted: NotSet,
            id_unit: NotSet,
            id_role: NotSet,
        };
        if let Some(n) = self.full_name {
            validate_name(&n)?;
            am.full_name = Set(n);
        }
        if let Some(e) = self.email {
            validate_email(&e)?;
            am.email = Set(e);
        }
        if let Some(a) = self.accepted {
            am.accepted = Set(a);
        }
        if let Some(u) = self.id_unit {
            am.id_unit = Set(u);
        }
        if let Some(r) = self.id_role {
            am.id_role = Set(r);
        }
        Ok(am)
    }
}

pub fn validate_cpf(cpf: &str) -> Result<(), errors::ModelError> {
    if cpf.len() != 11 || !cpf.chars().all(|c| c.is_ascii_digit()) {
        return Err(errors::ModelError::Validation("cpf must be 11 digits".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let e = email.trim();
    match e.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(errors::ModelError::Validation("invalid email".into())),
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("fullName required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewUser) -> Result<Model, errors::ModelError> {
    validate_cpf(&input.cpf)?;
    validate_name(&input.full_name)?;
    validate_email(&input.email)?;
    let am = ActiveModel {
        cpf: Set(input.cpf),
        full_name: Set(input.full_name),
        email: Set(input.email),
        accepted: Set(input.accepted),
        id_unit: Set(input.id_unit),
        id_role: Set(input.id_role),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
