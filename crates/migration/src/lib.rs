//! Migrator registering entity-specific migrations in dependency order.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_role;
mod m20240101_000002_create_unit;
mod m20240101_000003_create_user;
mod m20240101_000004_create_user_access_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_role::Migration),
            Box::new(m20240101_000002_create_unit::Migration),
            // user references role and unit
            Box::new(m20240101_000003_create_user::Migration),
            Box::new(m20240101_000004_create_user_access_log::Migration),
        ]
    }
}
