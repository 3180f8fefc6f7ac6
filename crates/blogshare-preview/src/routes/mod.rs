//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /{*postpath}` - Post share page (or redirect to the blog)

mod health;
mod post;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::error::PreviewError;
use crate::state::AppState;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/{*postpath}", get(post::post_handler))
        .fallback(not_found)
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Link-preview crawlers must be able to fetch post pages.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

async fn not_found() -> PreviewError {
    PreviewError::NotFound("no route".to_string())
}
