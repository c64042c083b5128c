//! Create `user` table with FKs to `role` and `unit`.
//!
//! Deleting a role or unit is refused while users still point at it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string_len(User::Cpf, 11).primary_key())
                    .col(string_len(User::FullName, 255).not_null())
                    .col(string_len(User::Email, 255).unique_key().not_null())
                    .col(boolean(User::Accepted).not_null().default(false))
                    .col(integer(User::IdUnit).not_null())
                    .col(integer(User::IdRole).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_unit")
                            .from(User::Table, User::IdUnit)
                            .to(Unit::Table, Unit::IdUnit)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_role")
                            .from(User::Table, User::IdRole)
                            .to(Role::Table, Role::IdRole)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_id_role")
                    .table(User::Table)
                    .col(User::IdRole)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Cpf, FullName, Email, Accepted, IdUnit, IdRole }

#[derive(DeriveIden)]
enum Unit { Table, IdUnit }

#[derive(DeriveIden)]
enum Role { Table, IdRole }
