//! Domain entities - the core business objects.

mod due_window;
mod post;

pub use due_window::DueDateRange;
pub use post::{DUE_DATE_FORMAT, NewPost, Post, PostChanges, format_due_date, parse_due_date};
