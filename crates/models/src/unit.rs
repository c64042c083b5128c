use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Iterable, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::registry::Association;
use crate::user;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "unit")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_unit: i32,
    #[sea_orm(unique)]
    pub name: String,
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

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnit {
    #[serde(default)]
    pub id_unit: Option<i32>,
    pub name: String,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewUnit) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    let am = ActiveModel {
        id_unit: input.id_unit.map(Set).unwrap_or(NotSet),
        name: Set(input.name),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
