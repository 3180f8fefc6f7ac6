//! HTML rendering for blog post share pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation. Dynamic values are escaped; the post body is the one
//! deliberate exception, trusted as the content API's own markup.

pub mod components;
pub mod post;

use maud::Markup;

use crate::config::Config;
use crate::error::PreviewError;
use crate::resolve::PostProps;

/// Render resolved post props into a complete HTML page.
pub fn render_page(config: &Config, props: &PostProps) -> Result<Markup, PreviewError> {
    post::render(props, &config.locale)
}
