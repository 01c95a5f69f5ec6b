//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use socialplan_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            brand: model.brand,
            platform: model.platform,
            due_date: model.due_date,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel. The id is set, so
/// saving it updates the existing row.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            brand: Set(post.brand),
            platform: Set(post.platform),
            due_date: Set(post.due_date),
        }
    }
}

/// A new post leaves the id to the database sequence.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            brand: Set(post.brand),
            platform: Set(post.platform),
            due_date: Set(post.due_date),
        }
    }
}
