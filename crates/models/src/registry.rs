//! Aggregated set of entities and their associations.
//!
//! Built once by the composition root and handed to service constructors by
//! reference; nothing here is global.

use sea_orm::{DatabaseConnection, EntityName};
use tracing::info;

use crate::{role, unit, user, user_access_log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssociationKind {
    HasMany,
    BelongsTo,
}

/// Directed link between two tables, as declared by an entity's `Relation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Association {
    pub from: String,
    pub to: String,
    pub kind: AssociationKind,
}

impl Association {
    pub fn has_many(from: impl EntityName, to: impl EntityName) -> Self {
        Self { from: from.table_name().to_string(), to: to.table_name().to_string(), kind: AssociationKind::HasMany }
    }

    pub fn belongs_to(from: impl EntityName, to: impl EntityName) -> Self {
        Self { from: from.table_name().to_string(), to: to.table_name().to_string(), kind: AssociationKind::BelongsTo }
    }
}

#[derive(Debug)]
pub struct ModelRegistry {
    db: DatabaseConnection,
    associations: Vec<Association>,
}

impl ModelRegistry {
    pub fn build(db: DatabaseConnection) -> Self {
        let associations: Vec<Association> = [
            role::associations(),
            unit::associations(),
            user::associations(),
            user_access_log::associations(),
        ]
        .into_iter()
        .flatten()
        .collect();
        for a in &associations {
            info!(from = %a.from, to = %a.to, kind = ?a.kind, "model_association");
        }
        Self { db, associations }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    pub fn tables(&self) -> Vec<String> {
        vec![
            role::Entity.table_name().to_string(),
            unit::Entity.table_name().to_string(),
            user::Entity.table_name().to_string(),
            user_access_log::Entity.table_name().to_string(),
        ]
    }

    pub fn is_associated(&self, from: &str, to: &str, kind: AssociationKind) -> bool {
        self.associations.iter().any(|a| a.from == from && a.to == to && a.kind == kind)
    }
}
