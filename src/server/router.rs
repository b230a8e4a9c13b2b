use crate::server::handlers::{health_handler, upload_image_handler};
use crate::server::types::AppState;
use crate::utils::constants::SERVER_REQUEST_BODY_LIMIT;
use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(Duration::from_secs(3600));
    // axum's own 2 MB default would trip before the configured cap does
    let request_body_limit = RequestBodyLimitLayer::new(SERVER_REQUEST_BODY_LIMIT);

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_image_handler))
        .fallback_service(ServeDir::new("public"))
        .layer(timeout)
        .layer(cors)
        .layer(DefaultBodyLimit::disable())
        .layer(request_body_limit)
        .with_state(state)
}
