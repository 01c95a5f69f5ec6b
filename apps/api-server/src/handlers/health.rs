//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// 200 while the post store answers, 503 otherwise.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.posts.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            store: "up",
            version: env!("CARGO_PKG_VERSION"),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded",
                store: "down",
                version: env!("CARGO_PKG_VERSION"),
            })
        }
    }
}
