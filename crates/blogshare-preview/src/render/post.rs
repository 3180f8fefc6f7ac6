//! Blog post renderer.
//!
//! The post body is the content API's rendered HTML and is injected as-is.

use maud::{Markup, PreEscaped, html};

use super::components::{OpenGraphData, page_shell, plain_excerpt, site_name_from_host};
use crate::error::PreviewError;
use crate::resolve::PostProps;

/// Render a post page with its social-sharing metadata.
///
/// Fails when the post has no featured image node, since both the
/// `og:image` tag and the hero image depend on it.
pub fn render(props: &PostProps, locale: &str) -> Result<Markup, PreviewError> {
    let post = &props.post;
    let title = post.title.as_deref().unwrap_or_default();

    let image = post.featured_image_node().ok_or_else(|| {
        PreviewError::Render(format!("post '{}' has no featured image", props.path))
    })?;
    let image_src = image.source_url.as_deref();
    let image_alt = image
        .alt_text
        .as_deref()
        .filter(|alt| !alt.is_empty())
        .unwrap_or(title);

    let description = plain_excerpt(post.excerpt.as_deref());

    let og = OpenGraphData {
        title,
        description: &description,
        og_type: "article",
        locale,
        site_name: site_name_from_host(&props.host),
        image: image_src,
        image_alt,
        published_time: post.date_gmt.as_deref(),
        modified_time: post.modified_gmt.as_deref(),
    };

    let body = html! {
        div class="post-container" {
            h1 { (title) }
            img src=[image_src] alt=(image_alt);
            article {
                (PreEscaped(post.content.as_deref().unwrap_or_default()))
            }
        }
    };

    Ok(page_shell(title, og, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Edge, MediaItem, Post};

    fn props(post: Post) -> PostProps {
        PostProps {
            path: "2024/my-post".to_string(),
            post,
            host: "blog.example.com".to_string(),
        }
    }

    fn sample_post() -> Post {
        Post {
            id: Some("cG9zdDox".to_string()),
            excerpt: Some("<p>Hello [shortcode] World</p>".to_string()),
            title: Some("My Post".to_string()),
            link: Some("http://blog.example.com/2024/my-post/".to_string()),
            date_gmt: Some("2024-03-01T08:00:00".to_string()),
            modified_gmt: Some("2024-03-02T09:15:00".to_string()),
            content: Some("<p>Raw <em>body</em></p>".to_string()),
            author: None,
            featured_image: Some(Edge {
                node: Some(MediaItem {
                    source_url: Some("https://cdn.example.com/hero.jpg".to_string()),
                    alt_text: Some("A hero".to_string()),
                }),
            }),
        }
    }

    #[test]
    fn render_full_post() {
        let html = render(&props(sample_post()), "en_US").unwrap().into_string();

        assert!(html.contains(r#"<meta property="og:title" content="My Post">"#));
        assert!(html.contains(r#"<meta property="og:description" content="Hello World">"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="blog">"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://cdn.example.com/hero.jpg">"#
        ));
        assert!(html.contains(r#"<meta property="og:image:alt" content="A hero">"#));
        assert!(html.contains(
            r#"<meta property="article:published_time" content="2024-03-01T08:00:00">"#
        ));
        assert!(html.contains(
            r#"<meta property="article:modified_time" content="2024-03-02T09:15:00">"#
        ));
        assert!(html.contains("<title>My Post</title>"));
        assert!(html.contains("<h1>My Post</h1>"));
        assert!(html.contains(r#"<img src="https://cdn.example.com/hero.jpg" alt="A hero">"#));
    }

    #[test]
    fn render_injects_raw_content() {
        let html = render(&props(sample_post()), "en_US").unwrap().into_string();
        assert!(html.contains("<article><p>Raw <em>body</em></p></article>"));
    }

    #[test]
    fn render_alt_falls_back_to_title() {
        let mut post = sample_post();
        if let Some(node) = post.featured_image.as_mut().and_then(|e| e.node.as_mut()) {
            node.alt_text = Some(String::new());
        }
        let html = render(&props(post), "en_US").unwrap().into_string();
        assert!(html.contains(r#"<meta property="og:image:alt" content="My Post">"#));
        assert!(html.contains(r#"alt="My Post""#));
    }

    #[test]
    fn render_alt_missing_falls_back_to_title() {
        let mut post = sample_post();
        if let Some(node) = post.featured_image.as_mut().and_then(|e| e.node.as_mut()) {
            node.alt_text = None;
        }
        let html = render(&props(post), "en_US").unwrap().into_string();
        assert!(html.contains(r#"<meta property="og:image:alt" content="My Post">"#));
    }

    #[test]
    fn render_uses_configured_locale() {
        let html = render(&props(sample_post()), "fr_FR").unwrap().into_string();
        assert!(html.contains(r#"<meta property="og:locale" content="fr_FR">"#));
    }

    #[test]
    fn render_escapes_title() {
        let mut post = sample_post();
        post.title = Some("Tips & <Tricks>".to_string());
        let html = render(&props(post), "en_US").unwrap().into_string();
        assert!(html.contains("<h1>Tips &amp; &lt;Tricks&gt;</h1>"));
    }

    #[test]
    fn render_fails_without_featured_image() {
        let mut post = sample_post();
        post.featured_image = None;
        let err = render(&props(post), "en_US").unwrap_err();
        assert!(matches!(err, PreviewError::Render(_)));
    }

    #[test]
    fn render_fails_without_image_node() {
        let mut post = sample_post();
        post.featured_image = Some(Edge { node: None });
        assert!(render(&props(post), "en_US").is_err());
    }

    #[test]
    fn render_image_without_source_url() {
        let mut post = sample_post();
        if let Some(node) = post.featured_image.as_mut().and_then(|e| e.node.as_mut()) {
            node.source_url = None;
        }
        let html = render(&props(post), "en_US").unwrap().into_string();
        assert!(html.contains(r#"<meta property="og:image">"#));
        assert!(!html.contains(r#"<meta property="og:image" content"#));
        assert!(html.contains(r#"<img alt="A hero">"#));
    }
}
