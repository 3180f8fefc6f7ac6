//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8081").
    pub bind_addr: String,

    /// Canonical origin of the blog. Redirects land here.
    /// e.g., "http://pro-techs-bloggers.lovestoblog.com"
    pub content_origin: String,

    /// GraphQL endpoint of the content API.
    pub graphql_endpoint: String,

    /// Substring of the `Referer` header that triggers a redirect to the origin.
    pub referrer_marker: String,

    /// Value of the `og:locale` tag.
    pub locale: String,
}

const DEFAULT_CONTENT_ORIGIN: &str = "http://pro-techs-bloggers.lovestoblog.com";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults)
    ///
    /// Optional:
    /// - `BLOGSHARE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8081")
    /// - `BLOGSHARE_CONTENT_ORIGIN`: Blog origin used for redirects
    /// - `BLOGSHARE_GRAPHQL_ENDPOINT`: Content API endpoint (default: "{origin}/graphql")
    /// - `BLOGSHARE_REFERRER_MARKER`: Referer substring that forces a redirect (default: "facebook.com", must not be empty)
    /// - `BLOGSHARE_LOCALE`: `og:locale` value (default: "en_US")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BLOGSHARE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let content_origin = std::env::var("BLOGSHARE_CONTENT_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CONTENT_ORIGIN.to_string())
            .trim_end_matches('/')
            .to_string();

        if !content_origin.starts_with("http://") && !content_origin.starts_with("https://") {
            anyhow::bail!("BLOGSHARE_CONTENT_ORIGIN must be an http(s) URL, got '{content_origin}'");
        }

        let graphql_endpoint = std::env::var("BLOGSHARE_GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| format!("{content_origin}/graphql"));

        let referrer_marker = std::env::var("BLOGSHARE_REFERRER_MARKER")
            .unwrap_or_else(|_| "facebook.com".to_string());

        if referrer_marker.is_empty() {
            anyhow::bail!("BLOGSHARE_REFERRER_MARKER must not be empty");
        }

        let locale = std::env::var("BLOGSHARE_LOCALE").unwrap_or_else(|_| "en_US".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            content_origin = %content_origin,
            graphql_endpoint = %graphql_endpoint,
            referrer_marker = %referrer_marker,
            locale = %locale,
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            content_origin,
            graphql_endpoint,
            referrer_marker,
            locale,
        })
    }

    /// Configuration pointing at a custom content API, with defaults elsewhere.
    pub fn for_origin(content_origin: &str, graphql_endpoint: &str) -> Self {
        Self {
            bind_addr: "127.0.0.1:0".to_string(),
            content_origin: content_origin.trim_end_matches('/').to_string(),
            graphql_endpoint: graphql_endpoint.to_string(),
            referrer_marker: "facebook.com".to_string(),
            locale: "en_US".to_string(),
        }
    }
}
