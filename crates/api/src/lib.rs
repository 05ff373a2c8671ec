//! HTTP server for BMI assessment.
//!
//! Serves the form page, accepts weight/height as JSON on
//! `POST /assess_health`, and responds with a rendered half-circle gauge
//! PNG, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::Config;

/// Shared application state accessible from all handlers.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/assess_health", post(routes::assess::assess))
        .route("/health", get(routes::health::check))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
