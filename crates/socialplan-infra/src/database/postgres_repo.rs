//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use socialplan_migration::{Migrator, MigratorTrait};

use socialplan_core::domain::{DueDateRange, NewPost, Post};
use socialplan_core::error::RepoError;
use socialplan_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_due_date_range(&self, range: &DueDateRange) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(start = %range.start(), end = %range.end(), "Finding posts by due date");

        let result = PostEntity::find()
            .filter(post::Column::DueDate.between(range.start(), range.end()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post inserted");
        Ok(model.into())
    }

    async fn ensure_schema(&self) -> Result<(), RepoError> {
        tracing::info!("Applying pending migrations...");
        Migrator::up(&self.db, None).await.map_err(map_db_err)?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db.ping().await.map_err(map_db_err)
    }
}
