//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use std::any::Any as PanicPayload;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{health_handler, stats_handler, top_news_handler, AppState};
use crate::error::NewsError;

/// Renders a handler panic as the generic 500 body.
fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", message);

    NewsError::Internal(message).into_response()
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /top-news/` (and `/top-news`) - Top stories, `?num=N`
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Panics: Rendered as the generic 500
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/top-news/", get(top_news_handler))
        .route("/top-news", get(top_news_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
