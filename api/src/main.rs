//! Mergington High School Activities API
//!
//! A small service for listing extracurricular activities and managing
//! student sign-ups, plus a static client page.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::memory::seed_activities;
use adapters::InMemoryActivityDirectory;
use app::RosterService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster_service: Arc<RosterService<InMemoryActivityDirectory>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
///
/// Kept separate from `main` so tests can drive the exact same router.
fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Activity directory
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:name/signup", post(handlers::signup))
        .route("/activities/:name/unregister", delete(handlers::unregister))
        // Static client page
        .route_service("/", ServeFile::new(format!("{}/index.html", static_dir)))
        .nest_service("/static", ServeDir::new(static_dir))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,activities_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Activities API...");

    // Load configuration
    let config = Config::from_env();

    // Seed the in-memory directory; it lives for the process lifetime
    let directory = Arc::new(InMemoryActivityDirectory::new(seed_activities()));
    let roster_service = Arc::new(RosterService::new(directory));

    let state = AppState { roster_service };
    let app = build_router(state, &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
