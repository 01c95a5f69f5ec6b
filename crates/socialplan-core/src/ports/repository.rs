use async_trait::async_trait;

use crate::domain::{DueDateRange, NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist an existing entity.
    ///
    /// Fails with [`RepoError::NotFound`] if the entity is no longer stored.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Every stored post, in store order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose due date falls inside `range`, both bounds included.
    async fn find_by_due_date_range(&self, range: &DueDateRange) -> Result<Vec<Post>, RepoError>;

    /// Insert a post and return it with its assigned id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Create the backing schema if it does not exist yet. Idempotent.
    async fn ensure_schema(&self) -> Result<(), RepoError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;
}
