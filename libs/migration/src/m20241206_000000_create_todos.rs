use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ids are 64-bit and never reused on either backend
        let ddl = match manager.get_database_backend() {
            DatabaseBackend::Sqlite => {
                r#"
                CREATE TABLE IF NOT EXISTS todos (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    title       TEXT NOT NULL,
                    description TEXT NULL,
                    completed   BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at  TEXT NOT NULL,
                    updated_at  TEXT NOT NULL
                )
                "#
            }
            _ => {
                r#"
                CREATE TABLE IF NOT EXISTS todos (
                    id          BIGSERIAL PRIMARY KEY,
                    title       TEXT NOT NULL,
                    description TEXT NULL,
                    completed   BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
                "#
            }
        };

        manager.get_connection().execute_unprepared(ddl).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todos_completed")
                    .table(Todos::Table)
                    .col(Todos::Completed)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Completed,
}
