//! In-memory post store - used when PostgreSQL support is compiled out,
//! and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use socialplan_core::domain::{DueDateRange, NewPost, Post};
use socialplan_core::error::RepoError;
use socialplan_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: BTreeMap<i32, Post>,
    next_id: i32,
}

/// Posts kept in a `BTreeMap` behind an async RwLock.
///
/// Ids start at 1 and are never reused, like a database sequence.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&post.id) {
            Some(row) => {
                *row = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_due_date_range(&self, range: &DueDateRange) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|post| range.contains(post.due_date))
            .cloned()
            .collect())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;

        let post = Post::from_new(id, new_post);
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn ensure_schema(&self) -> Result<(), RepoError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_post(title: &str, due_date: NaiveDate) -> NewPost {
        NewPost {
            title: title.to_string(),
            brand: "Acme".to_string(),
            platform: "TikTok".to_string(),
            due_date,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(new_post("a", date(2025, 1, 1))).await.unwrap();
        let second = repo.create(new_post("b", date(2025, 1, 2))).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(new_post("a", date(2025, 1, 1))).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(new_post("b", date(2025, 1, 1))).await.unwrap();
        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn range_includes_both_bounds() {
        let repo = InMemoryPostRepository::new();
        for (title, due) in [
            ("before", date(2024, 12, 31)),
            ("start", date(2025, 1, 1)),
            ("middle", date(2025, 1, 3)),
            ("end", date(2025, 1, 5)),
            ("after", date(2025, 1, 6)),
        ] {
            repo.create(new_post(title, due)).await.unwrap();
        }

        let range = DueDateRange::new(date(2025, 1, 1), date(2025, 1, 5)).unwrap();
        let titles: Vec<_> = repo
            .find_by_due_date_range(&range)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["start", "middle", "end"]);
    }

    #[tokio::test]
    async fn save_replaces_existing_row() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.create(new_post("a", date(2025, 1, 1))).await.unwrap();
        post.brand = "Globex".to_string();

        repo.save(post.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn save_of_missing_row_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let ghost = Post::from_new(42, new_post("ghost", date(2025, 1, 1)));

        assert!(matches!(repo.save(ghost).await, Err(RepoError::NotFound)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_schema_keeps_existing_rows() {
        let repo = InMemoryPostRepository::new();
        repo.create(new_post("a", date(2025, 1, 1))).await.unwrap();

        repo.ensure_schema().await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo.ping().await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_not_found() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }
}
