//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use socialplan_core::DomainError;
use socialplan_core::domain::{DueDateRange, Post, PostChanges, format_due_date, parse_due_date};
use socialplan_core::ports::BaseRepository;
use socialplan_shared::ApiResponse;
use socialplan_shared::dto::{DueDateQuery, PostInput, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const BAD_DUE_DATE: &str = "Invalid due_date format. Use YYYY-MM-DD";

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        brand: post.brand,
        platform: post.platform,
        due_date: format_due_date(post.due_date),
    }
}

fn post_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(post_response).collect()
}

/// Decode the wire input. Only the date needs parsing here; presence and
/// blank checks belong to the domain.
fn changes_from_input(input: PostInput) -> AppResult<PostChanges> {
    let due_date = input
        .due_date
        .as_deref()
        .map(parse_due_date)
        .transpose()
        .map_err(|_| AppError::BadRequest(BAD_DUE_DATE.to_string()))?;

    Ok(PostChanges {
        title: input.title,
        brand: input.brand,
        platform: input.platform,
        due_date,
    })
}

fn parse_post_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid post ID".to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn load_post(state: &AppState, id: i32) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store("Database error", e))?
        .ok_or_else(|| {
            DomainError::NotFound {
                entity_type: "Post",
                id,
            }
            .into()
        })
}

/// GET /posts
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_all()
        .await
        .map_err(|e| AppError::store("Failed to retrieve posts", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Posts retrieved successfully",
        post_responses(posts),
    )))
}

/// GET /posts/due-date?date1=YYYY-MM-DD&date2=YYYY-MM-DD
///
/// Both bounds are inclusive and `date2` may not precede `date1`.
pub async fn list_by_due_date_range(
    state: web::Data<AppState>,
    query: web::Query<DueDateQuery>,
) -> AppResult<HttpResponse> {
    let DueDateQuery { date1, date2 } = query.into_inner();

    let (Some(date1), Some(date2)) = (non_empty(date1), non_empty(date2)) else {
        return Err(AppError::BadRequest(
            "Both start and end dates are required".to_string(),
        ));
    };

    let start = parse_due_date(&date1).map_err(|_| {
        AppError::BadRequest("Invalid start date format. Use YYYY-MM-DD".to_string())
    })?;
    let end = parse_due_date(&date2).map_err(|_| {
        AppError::BadRequest("Invalid end date format. Use YYYY-MM-DD".to_string())
    })?;
    let range = DueDateRange::new(start, end)?;

    let posts = state
        .posts
        .find_by_due_date_range(&range)
        .await
        .map_err(|e| AppError::store("Database error", e))?;

    tracing::debug!(%start, %end, count = posts.len(), "Range query");
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Posts found!", post_responses(posts))))
}

/// GET /posts/{targetDays}
///
/// Posts due between today (UTC) and `targetDays` days from now. Negative
/// offsets look back in time.
pub async fn list_closest(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let days: i64 = path
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid targetDays parameter".to_string()))?;

    let range = DueDateRange::around(Utc::now().date_naive(), days)?;

    let posts = state
        .posts
        .find_by_due_date_range(&range)
        .await
        .map_err(|e| AppError::store("Failed to get posts", e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Posts found", post_responses(posts))))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    if input.due_date.is_none() {
        return Err(AppError::BadRequest("due_date is required".to_string()));
    }
    let new_post = changes_from_input(input)?.into_new_post()?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(|e| AppError::store("Failed to create post", e))?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Post created successfully",
        post_response(post),
    )))
}

/// PUT /posts/{id}
///
/// Partial update: only fields present in the body change. The body is
/// decoded after the lookup, so an unknown id is a 404 whatever the body.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let mut post = load_post(&state, id).await?;

    let input: PostInput = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;
    post.apply(changes_from_input(input)?)?;

    let post = state
        .posts
        .save(post)
        .await
        .map_err(|e| AppError::store("Failed to update post", e))?;

    tracing::info!(post_id = post.id, "Post updated");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post updated successfully",
        post_response(post),
    )))
}

/// PUT or DELETE /posts with no id segment.
pub async fn missing_id() -> AppResult<HttpResponse> {
    Err(AppError::BadRequest("Post ID is required".to_string()))
}

/// DELETE /posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = load_post(&state, id).await?;

    state
        .posts
        .delete(post.id)
        .await
        .map_err(|e| AppError::store("Failed to delete post", e))?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted successfully")))
}
