//! GraphQL client for the headless content API.
//!
//! A single point lookup: the post whose URI matches the requested path.
//! The payload is decoded loosely (every field optional) because the API
//! owns its shape and may omit anything.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Query for a single post addressed by its URI.
pub const POST_BY_URI_QUERY: &str = r#"query PostByUri($id: ID!) {
  post(id: $id, idType: URI) {
    id
    excerpt
    title
    link
    dateGmt
    modifiedGmt
    content
    author {
      node {
        name
      }
    }
    featuredImage {
      node {
        sourceUrl
        altText
      }
    }
  }
}"#;

/// A blog post as returned by the content API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    /// Excerpt HTML, possibly containing shortcodes like `[&hellip;]`.
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical permalink on the blog.
    #[serde(default)]
    pub link: Option<String>,
    /// Publication time in GMT, as formatted by the API.
    #[serde(default)]
    pub date_gmt: Option<String>,
    #[serde(default)]
    pub modified_gmt: Option<String>,
    /// Rendered body HTML.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<Edge<Author>>,
    #[serde(default)]
    pub featured_image: Option<Edge<MediaItem>>,
}

/// A one-to-one connection wrapper (`{ node { ... } }`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

/// Post author.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

/// Featured image attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl Post {
    /// The featured image node, if the post has one.
    pub fn featured_image_node(&self) -> Option<&MediaItem> {
        self.featured_image.as_ref().and_then(|e| e.node.as_ref())
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: PostVariables<'a>,
}

#[derive(Debug, Serialize)]
struct PostVariables<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    post: Option<Post>,
}

/// HTTP client bound to one GraphQL endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContentClient {
    /// Build a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("blogshare-preview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the post whose URI is `uri`.
    ///
    /// `Ok(None)` means the API answered but has no such post.
    pub async fn fetch_post(&self, uri: &str) -> Result<Option<Post>, FetchError> {
        let request = GraphQlRequest {
            query: POST_BY_URI_QUERY,
            variables: PostVariables { id: uri },
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(uri = %uri, status = %status, response = %body, "graphql response");

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        decode_post_response(&body)
    }
}

/// Decode a GraphQL response body into the optional post it carries.
fn decode_post_response(body: &str) -> Result<Option<Post>, FetchError> {
    let parsed: GraphQlResponse<PostData> = serde_json::from_str(body)?;

    if !parsed.errors.is_empty() {
        let messages = parsed
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FetchError::GraphQl(messages));
    }

    let data = parsed.data.ok_or(FetchError::EmptyData)?;
    Ok(data.post)
}
