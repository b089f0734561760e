use std::sync::Arc;

use crate::chat::resolver::ChatResolver;
use crate::config::Config;
use crate::jobs::client::JobSearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is fixed at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Chat mode is decided when this resolver is built and never changes.
    pub chat: ChatResolver,
    pub jobs: JobSearchClient,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        AppState {
            chat: ChatResolver::from_config(&config),
            jobs: JobSearchClient::from_config(&config),
            config: Arc::new(config),
        }
    }
}
