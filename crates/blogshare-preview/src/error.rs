//! Error types for the preview service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Preview service error type.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// No post exists at the requested path, or the content API could not be reached.
    #[error("not found: {0}")]
    NotFound(String),

    /// The post payload lacks data the page needs.
    #[error("render error: {0}")]
    Render(String),
}

/// Failure while querying the content API.
///
/// Never surfaced to clients: the resolver logs it and answers 404.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, timeout, or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response carried a GraphQL `errors` array.
    #[error("graphql error: {0}")]
    GraphQl(String),

    /// The response had neither `data` nor `errors`.
    #[error("response contained no data")]
    EmptyData,
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "This page could not be found.".to_string(),
            ),
            Self::Render(msg) => {
                tracing::error!(error = %msg, "post could not be rendered");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (status.as_u16()) ": " (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (status.as_u16()) }
                        p { (message) }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
