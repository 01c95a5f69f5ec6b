//! # Socialplan API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, middleware::NormalizePath, web};
use anyhow::Context;
use socialplan_core::ports::RateLimiter;
use socialplan_infra::InMemoryRateLimiter;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing::info!(
        "Starting Socialplan API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::init(&config).await?;

    let rate_limiter = Arc::new(
        InMemoryRateLimiter::new(config.rate_limit.clone())
            .context("invalid rate limit configuration")?,
    );
    spawn_rate_limit_sweeper(Arc::clone(&rate_limiter), config.rate_limit.window);
    let limiter: Arc<dyn RateLimiter> = rate_limiter;

    let cors_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(cors(&cors_origins))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, Arc::clone(&limiter)))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// CORS policy. No configured origins means any origin.
fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .max_age(3600);

    if allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Periodically forget rate limit state for idle callers.
fn spawn_rate_limit_sweeper(limiter: Arc<InMemoryRateLimiter>, every: std::time::Duration) {
    actix_rt::spawn(async move {
        let mut interval = actix_rt::time::interval(every);
        loop {
            interval.tick().await;
            limiter.sweep().await;
            tracing::debug!(
                tracked_keys = limiter.tracked_keys().await,
                "Rate limiter swept"
            );
        }
    });
}
