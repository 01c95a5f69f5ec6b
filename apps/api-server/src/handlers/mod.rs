//! HTTP handlers and route configuration.

mod health;
mod posts;

use std::sync::Arc;

use actix_web::web;
use socialplan_core::ports::RateLimiter;

use crate::middleware::error::{json_config, query_config};
use crate::middleware::rate_limit::RateLimitMiddleware;

/// Configure all application routes.
///
/// The `/posts` scope sits behind the rate limiter; `/health` does not.
pub fn configure_routes(cfg: &mut web::ServiceConfig, limiter: Arc<dyn RateLimiter>) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .wrap(RateLimitMiddleware::new(limiter))
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_all))
                        .route(web::post().to(posts::create))
                        .route(web::put().to(posts::missing_id))
                        .route(web::delete().to(posts::missing_id)),
                )
                // Registered before "/{id}" so it is not read as a day offset.
                .service(
                    web::resource("/due-date").route(web::get().to(posts::list_by_due_date_range)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::list_closest))
                        .route(web::put().to(posts::update))
                        .route(web::delete().to(posts::delete)),
                ),
        );
}
