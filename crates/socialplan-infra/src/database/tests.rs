use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use socialplan_core::domain::{DueDateRange, NewPost, Post};
use socialplan_core::error::RepoError;
use socialplan_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(id: i32, title: &str, due_date: NaiveDate) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        brand: "Acme".to_owned(),
        platform: "LinkedIn".to_owned(),
        due_date,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(3, "Test Post", date(2025, 1, 10))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post: Post = repo.find_by_id(3).await.unwrap().unwrap();
    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.due_date, date(2025, 1, 10));
}

#[tokio::test]
async fn test_find_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(BaseRepository::<Post, i32>::find_by_id(&repo, 99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_range_query_filters_with_between() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            row(1, "start", date(2025, 1, 1)),
            row(2, "end", date(2025, 1, 5)),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let range = DueDateRange::new(date(2025, 1, 1), date(2025, 1, 5)).unwrap();

    let posts = repo.find_by_due_date_range(&range).await.unwrap();
    assert_eq!(posts.len(), 2);

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("BETWEEN"), "{statement}");
    assert!(statement.contains("due_date"), "{statement}");
}

#[tokio::test]
async fn test_create_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row(11, "Launch", date(2025, 1, 10))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let created = repo
        .create(NewPost {
            title: "Launch".to_owned(),
            brand: "Acme".to_owned(),
            platform: "LinkedIn".to_owned(),
            due_date: date(2025, 1, 10),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 11);
    assert_eq!(created.title, "Launch");
}

#[tokio::test]
async fn test_save_of_vanished_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post: Post = row(5, "Gone", date(2025, 1, 10)).into();

    assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_without_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(BaseRepository::<Post, i32>::delete(&repo, 5).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    BaseRepository::<Post, i32>::delete(&repo, 5).await.unwrap();
}
