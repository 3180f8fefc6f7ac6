//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentClient;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Client for the headless content API.
    pub content: ContentClient,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let content = ContentClient::new(config.graphql_endpoint.clone())?;

        tracing::info!(
            endpoint = %content.endpoint(),
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            content,
        })
    }
}
