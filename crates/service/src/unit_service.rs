use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use models::unit;
use crate::errors::ServiceError;

/// List every unit ordered by name.
pub async fn list_units(db: &DatabaseConnection) -> Result<Vec<unit::Model>, ServiceError> {
    unit::Entity::find()
        .order_by_asc(unit::Column::Name)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a unit by id.
pub async fn get_unit(db: &DatabaseConnection, id_unit: i32) -> Result<Option<unit::Model>, ServiceError> {
    unit::Entity::find_by_id(id_unit).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a unit.
pub async fn create_unit(db: &DatabaseConnection, input: unit::NewUnit) -> Result<unit::Model, ServiceError> {
    Ok(unit::create(db, input).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn get_unit_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<unit::Model>::new()])
            .into_connection();
        assert!(get_unit(&db, 4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_unit_validates_before_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = create_unit(&db, unit::NewUnit { id_unit: None, name: "".into() }).await.unwrap_err();
        assert!(err.is_validation());
    }
}
