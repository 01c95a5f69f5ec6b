use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_posts_table::Posts;

const INDEX_NAME: &str = "idx_posts_due_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Range lookups filter on due_date.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(INDEX_NAME)
                    .table(Posts::Table)
                    .col(Posts::DueDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Posts::Table).to_owned())
            .await
    }
}
