//! Post page route handler.
//!
//! Handles `GET /{*postpath}` where `postpath` is the post's URI on the blog,
//! e.g. `/2024/03/my-post`.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::PreviewError;
use crate::render;
use crate::resolve::{self, RequestContext, Resolution};
use crate::state::AppState;

/// Handle a share-page request for a blog post.
///
/// This is the main entry point. It:
/// 1. Builds a [`RequestContext`] from the path, query, and headers
/// 2. Resolves it (redirect, not found, or post props)
/// 3. Renders the post page on the props path
pub async fn post_handler(
    State(state): State<AppState>,
    Path(postpath): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response, PreviewError> {
    let ctx = RequestContext {
        path_segments: split_segments(&postpath),
        referer: header_lossy(&headers, header::REFERER),
        fbclid: query_param(&params, "fbclid"),
        host: header_lossy(&headers, header::HOST).unwrap_or_default(),
    };

    match resolve::resolve(&state, &ctx).await {
        Resolution::Redirect(destination) => Ok(Redirect::temporary(&destination).into_response()),
        Resolution::NotFound => Err(PreviewError::NotFound(resolve::join_path(
            &ctx.path_segments,
        ))),
        Resolution::Props(props) => {
            let markup = render::render_page(&state.config, &props)?;
            Ok(build_response(markup.into_string()))
        }
    }
}

/// Split the catch-all capture into non-empty segments.
fn split_segments(postpath: &str) -> Vec<String> {
    postpath
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Value of a possibly repeated query parameter.
///
/// The first non-empty value wins, so `?fbclid=abc&fbclid=` still counts.
fn query_param(params: &[(String, String)], name: &str) -> Option<String> {
    let mut values = params.iter().filter(|(k, _)| k == name).map(|(_, v)| v);
    let first = values.next()?;
    if !first.is_empty() {
        return Some(first.clone());
    }
    Some(values.find(|v| !v.is_empty()).unwrap_or(first).clone())
}

/// Header value as text. Non-UTF-8 bytes become U+FFFD instead of
/// dropping the whole header.
fn header_lossy(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

/// Build an HTTP response with HTML content and basic security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    (StatusCode::OK, headers, html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_segments_nested() {
        assert_eq!(split_segments("2024/03/my-post"), vec!["2024", "03", "my-post"]);
    }

    #[test]
    fn split_segments_drops_empty() {
        assert_eq!(split_segments("/hello-world/"), vec!["hello-world"]);
        assert_eq!(split_segments("a//b"), vec!["a", "b"]);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_param_single_value() {
        let params = pairs(&[("utm_source", "x"), ("fbclid", "IwAR0")]);
        assert_eq!(query_param(&params, "fbclid").as_deref(), Some("IwAR0"));
        assert_eq!(query_param(&params, "missing"), None);
    }

    #[test]
    fn query_param_repeated_prefers_non_empty() {
        let params = pairs(&[("fbclid", "IwAR0"), ("fbclid", "")]);
        assert_eq!(query_param(&params, "fbclid").as_deref(), Some("IwAR0"));

        let params = pairs(&[("fbclid", ""), ("fbclid", "IwAR1")]);
        assert_eq!(query_param(&params, "fbclid").as_deref(), Some("IwAR1"));
    }

    #[test]
    fn query_param_empty_value_is_present() {
        let params = pairs(&[("fbclid", "")]);
        assert_eq!(query_param(&params, "fbclid").as_deref(), Some(""));
    }

    #[test]
    fn header_lossy_reads_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("blog.example.com"));
        assert_eq!(
            header_lossy(&headers, header::HOST).as_deref(),
            Some("blog.example.com")
        );
        assert_eq!(header_lossy(&headers, header::REFERER), None);
    }

    #[test]
    fn header_lossy_keeps_obs_text() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_bytes(b"https://facebook.com/\xe9").unwrap(),
        );
        let referer = header_lossy(&headers, header::REFERER).unwrap();
        assert!(referer.starts_with("https://facebook.com/"));
        assert!(referer.contains('\u{FFFD}'));
    }

    #[test]
    fn build_response_sets_headers() {
        let response = build_response("<html></html>".to_string());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }
}
