//! Schema migrations, applied in order by [`Migrator`].

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_posts_table;
mod m20250101_000002_index_posts_due_date;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_posts_table::Migration),
            Box::new(m20250101_000002_index_posts_due_date::Migration),
        ]
    }
}
