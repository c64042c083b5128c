use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Iterable, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::registry::Association;
use crate::user;

/// One recorded access of a user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_access_log")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub cpf: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::Cpf).to(user::Column::Cpf).into(),
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
            Relation::User => Association::belongs_to(Entity, user::Entity),
        })
        .collect()
}

pub async fn create(db: &DatabaseConnection, cpf: &str) -> Result<Model, errors::ModelError> {
    user::validate_cpf(cpf)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        cpf: Set(cpf.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
