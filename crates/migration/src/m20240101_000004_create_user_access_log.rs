//! Create `user_access_log` table with FK to `user`.
//!
//! Rows go away together with their user.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccessLog::Table)
                    .if_not_exists()
                    .col(uuid(UserAccessLog::Id).primary_key())
                    .col(string_len(UserAccessLog::Cpf, 11).not_null())
                    .col(timestamp_with_time_zone(UserAccessLog::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_access_log_user")
                            .from(UserAccessLog::Table, UserAccessLog::Cpf)
                            .to(User::Table, User::Cpf)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_access_log_cpf_created_at")
                    .table(UserAccessLog::Table)
                    .col(UserAccessLog::Cpf)
                    .col(UserAccessLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserAccessLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserAccessLog { Table, Id, Cpf, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Cpf }
