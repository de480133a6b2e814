use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, repository::AnalysisRepository};

/// Create the main application router with all API endpoints
pub fn create_router(repo: Arc<dyn AnalysisRepository>) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Analysis endpoints
        .route(
            "/api/analysis",
            get(handlers::get_analysis).post(handlers::run_analysis),
        )
        // Cache management
        .route("/api/cache/invalidate", post(handlers::invalidate_cache))
        // Add shared state
        .with_state(repo)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
