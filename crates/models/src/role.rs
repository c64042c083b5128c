use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Iterable, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::registry::Association;
use crate::user;

/// Access-control role. `access_level` is an ordinal, higher means more access.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_role: i32,
    pub name: String,
    pub access_level: i32,
    pub allowed_actions: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::has_many(user::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn associations() -> Vec<Association> {
    Relation::iter()
        .map(|rel| match rel {
            Relation::User => Association::has_many(Entity, user::Entity),
        })
        .collect()
}

/// Payload for creating a role. `id_role` is normally left to the sequence.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    #[serde(default)]
    pub id_role: Option<i32>,
    pub name: String,
    pub access_level: i32,
    #[serde(default)]
    pub allowed_actions: Vec<String>,
}

/// Partial replacement of a role's fields; `None` leaves the column untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub access_level: Option<i32>,
    #[serde(default)]
    pub allowed_actions: Option<Vec<String>>,
}

impl RoleChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.access_level.is_none() && self.allowed_actions.is_none()
    }

    /// Validate and turn into an active model with only the changed columns set.
    /// Values are stored as sent.
    pub fn into_active_model(self) -> Result<ActiveModel, errors::ModelError> {
        let mut am = ActiveModel { id_role: NotSet, name: NotSet, access_level: NotSet, allowed_actions: NotSet };
        if let Some(n) = self.name {
            validate_name(&n)?;
            am.name = Set(n);
        }
        if let Some(l) = self.access_level {
            validate_access_level(l)?;
            am.access_level = Set(l);
        }
        if let Some(a) = self.allowed_actions {
            am.allowed_actions = Set(a);
        }
        Ok(am)
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_access_level(level: i32) -> Result<(), errors::ModelError> {
    if level < 0 {
        return Err(errors::ModelError::Validation("accessLevel must be >= 0".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewRole) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    validate_access_level(input.access_level)?;
    let am = ActiveModel {
        id_role: input.id_role.map(Set).unwrap_or(NotSet),
        name: Set(input.name),
        access_level: Set(input.access_level),
        allowed_actions: Set(input.allowed_actions),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
