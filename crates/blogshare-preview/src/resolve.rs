//! Request resolution.
//!
//! Turns an incoming page request into one of three outcomes: a redirect to
//! the blog itself, a not-found page, or the props needed to render a post.
//! Every failure of the content API collapses into not-found.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::content::Post;
use crate::state::AppState;

/// Bytes left unescaped by `encodeURI`: alphanumerics plus URI reserved and
/// unreserved marks.
const URI_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Everything the resolver reads from a request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Decoded path segments of the catch-all route.
    pub path_segments: Vec<String>,
    /// The `Referer` header, if any.
    pub referer: Option<String>,
    /// The `fbclid` query parameter, if any. When repeated, the first
    /// non-empty value.
    pub fbclid: Option<String>,
    /// The `Host` header (empty when absent).
    pub host: String,
}

/// Data handed to the renderer for a resolved post.
#[derive(Debug, Clone)]
pub struct PostProps {
    /// Slash-joined request path, used as the post URI.
    pub path: String,
    pub post: Post,
    pub host: String,
}

/// Outcome of resolving a request.
#[derive(Debug)]
pub enum Resolution {
    /// Temporary redirect to this absolute URL.
    Redirect(String),
    /// No post could be produced for the path.
    NotFound,
    /// A post ready to render (boxed to reduce enum size).
    Props(Box<PostProps>),
}

/// Resolve a request against the content API.
///
/// Redirect checks run first and skip the fetch entirely.
pub async fn resolve(state: &AppState, ctx: &RequestContext) -> Resolution {
    let path = join_path(&ctx.path_segments);
    tracing::info!(path = %path, "requested path");

    if should_redirect(ctx, &state.config.referrer_marker) {
        let destination = redirect_destination(&state.config.content_origin, &path);
        tracing::info!(
            path = %path,
            destination = %destination,
            referer = ctx.referer.as_deref().unwrap_or(""),
            "redirecting to origin"
        );
        return Resolution::Redirect(destination);
    }

    match state.content.fetch_post(&path).await {
        Ok(Some(post)) => Resolution::Props(Box::new(PostProps {
            path,
            post,
            host: ctx.host.clone(),
        })),
        Ok(None) => {
            tracing::warn!(path = %path, "no post data found");
            Resolution::NotFound
        }
        Err(err) => {
            tracing::error!(path = %path, error = %err, "graphql request failed");
            Resolution::NotFound
        }
    }
}

/// Join path segments with `/`, without leading or trailing slashes.
pub fn join_path(segments: &[String]) -> String {
    segments.join("/")
}

/// Whether the request should bounce to the origin instead of rendering.
///
/// True when the referer mentions `referrer_marker` or a non-empty `fbclid`
/// is present.
pub fn should_redirect(ctx: &RequestContext, referrer_marker: &str) -> bool {
    let from_marked_referer = ctx
        .referer
        .as_deref()
        .is_some_and(|r| r.contains(referrer_marker));
    let has_fbclid = ctx.fbclid.as_deref().is_some_and(|v| !v.is_empty());

    from_marked_referer || has_fbclid
}

/// Build the redirect URL: origin, a slash, then the `encodeURI`-escaped path.
pub fn redirect_destination(origin: &str, path: &str) -> String {
    format!("{origin}/{}", encode_uri(path))
}

/// Percent-encode a string the way `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI_ESCAPE).to_string()
}
