//! Blogshare Preview - share pages for headless blog posts.
//!
//! This crate provides a small HTTP server that renders one HTML page per
//! blog post, carrying the Open Graph tags link-preview crawlers look for.
//! Post data comes from a headless content API over GraphQL.
//!
//! # Architecture
//!
//! - **Resolve**: Reads the path, `Referer`, and `fbclid`; redirects social
//!   click-throughs to the blog, otherwise fetches the post
//! - **Content**: GraphQL client for the content API
//! - **Render**: Generates HTML with Open Graph tags using maud
//!
//! # URL Pattern
//!
//! ```text
//! GET /{post_uri}
//! ```
//!
//! Any failure to fetch the post, including upstream errors, answers 404.

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
