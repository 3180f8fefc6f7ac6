//! Shared HTML pieces and text helpers used by the post page.

use std::sync::LazyLock;

use maud::{Markup, PreEscaped, html};
use regex::Regex;

/// Inline CSS for post pages.
///
/// Only frames the post; the article body keeps whatever styling the
/// blog's HTML carries.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:#111;background:#fafafa;padding:1.5rem 1rem}
.post-container{max-width:720px;margin:0 auto}
.post-container h1{font-size:1.9rem;line-height:1.25;letter-spacing:-.01em;margin:0 0 1rem}
.post-container img{max-width:100%;height:auto;border-radius:8px}
.post-container article{font-size:1.05rem;margin-top:1rem}
@media(prefers-color-scheme:dark){
body{background:#0f0f17;color:#e5e5e5}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
@media(prefers-color-scheme:dark){
body{background:#0f0f17;color:#e0e0e8}
.error-page p{color:#aaa}
}
"#;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

/// Open Graph and article metadata for a page.
pub struct OpenGraphData<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub og_type: &'a str,
    pub locale: &'a str,
    pub site_name: &'a str,
    /// Image URL. The tag is omitted when absent.
    pub image: Option<&'a str>,
    pub image_alt: &'a str,
    pub published_time: Option<&'a str>,
    pub modified_time: Option<&'a str>,
}

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(title: &str, og: OpenGraphData<'_>, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";

                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:type" content=(og.og_type);
                meta property="og:locale" content=(og.locale);
                meta property="og:site_name" content=(og.site_name);
                meta property="article:published_time" content=[og.published_time];
                meta property="article:modified_time" content=[og.modified_time];
                meta property="og:image" content=[og.image];
                meta property="og:image:alt" content=(og.image_alt);

                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body_content)
            }
        }
    }
}

/// Turn an excerpt into a plain-text description.
///
/// Strips every HTML tag, then only the first `[...]` shortcode group, then
/// collapses whitespace runs.
pub fn plain_excerpt(excerpt: Option<&str>) -> String {
    let Some(excerpt) = excerpt.filter(|e| !e.is_empty()) else {
        return String::new();
    };

    let without_tags = TAG_RE.replace_all(excerpt, "");
    let without_shortcode = SHORTCODE_RE.replace(&without_tags, "");

    without_shortcode
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Site name shown in previews: the first dot-separated label of the host.
///
/// `www.example.com` gives `www`; a bare `localhost:8081` is returned whole.
pub fn site_name_from_host(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}
