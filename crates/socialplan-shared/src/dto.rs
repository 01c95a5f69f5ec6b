//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Every field is optional: creation requires all of them, an update
/// changes only the ones present. `due_date` is a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    pub due_date: Option<String>,
}

/// A stored post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: String,
}

/// Query string of `GET /posts/due-date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DueDateQuery {
    pub date1: Option<String>,
    pub date2: Option<String>,
}
