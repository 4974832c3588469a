// src/routes/mod.rs
pub mod message;

use axum::{
    Router,
    routing::{get, post},
};
use message::post_message;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/message", post(post_message))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
