//! Chat Response Resolver: turns a user message into a reply string.
//!
//! The mode is fixed at construction:
//! - `Live`: one call to the completion backend; a failed call answers with the
//!   keyword reply for that call only and the resolver stays live.
//! - `Mock`: never touches the network; answers from the greeting templates.
//!
//! `resolve` never returns an error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::chat::mode::ChatMode;
use crate::chat::picker::{ResponsePicker, SeededPicker, ThreadRngPicker};
use crate::chat::templates::{keyword_reply, mock_reply, MOCK_TEMPLATES};
use crate::config::Config;
use crate::llm_client::prompts::{
    fill_placeholders, CHAT_SYSTEM_TEMPLATE, UNKNOWN_JOB_COUNT, UNKNOWN_NAME, UNKNOWN_ROLE,
};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::{MarketSnapshot, UserProfile};

/// A chat-completion backend. `LlmClient` is the production implementation.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        LlmClient::complete(self, system, user).await
    }
}

#[derive(Clone)]
enum Route {
    Live(Arc<dyn CompletionBackend>),
    Mock(Arc<dyn ResponsePicker>),
}

#[derive(Clone)]
pub struct ChatResolver {
    route: Route,
}

impl ChatResolver {
    /// Builds the resolver the server runs with, selecting the mode from config.
    pub fn from_config(config: &Config) -> Self {
        let mode = ChatMode::select(config.chat_api_key.as_deref(), config.deploy_host.as_deref());
        info!("Chat mode selected: {}", mode.label());

        match mode {
            ChatMode::Live { api_key } => {
                let llm = LlmClient::new(
                    api_key,
                    config.chat_api_url.clone(),
                    config.chat_model.clone(),
                );
                info!("Chat backend: {} (model: {})", config.chat_api_url, llm.model());
                Self::live(Arc::new(llm))
            }
            ChatMode::Mock => {
                let picker: Arc<dyn ResponsePicker> = match config.chat_mock_seed {
                    Some(seed) => Arc::new(SeededPicker::new(seed)),
                    None => Arc::new(ThreadRngPicker),
                };
                Self::mock(picker)
            }
        }
    }

    pub fn live(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            route: Route::Live(backend),
        }
    }

    pub fn mock(picker: Arc<dyn ResponsePicker>) -> Self {
        Self {
            route: Route::Mock(picker),
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match &self.route {
            Route::Live(_) => "live",
            Route::Mock(_) => "mock",
        }
    }

    /// Produces a reply for `message`. Every failure path still yields text.
    pub async fn resolve(
        &self,
        message: &str,
        profile: &UserProfile,
        market: &MarketSnapshot,
    ) -> String {
        match &self.route {
            Route::Mock(picker) => {
                let index = picker.pick(MOCK_TEMPLATES.len());
                debug!("Mock chat reply using template {index}");
                mock_reply(index, profile)
            }
            Route::Live(backend) => {
                let system = build_system_prompt(profile, market);
                match backend.complete(&system, message).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!("Chat backend failed, answering from keyword fallback: {e}");
                        keyword_reply(message, market)
                    }
                }
            }
        }
    }
}

/// System instruction carrying the user's name, role and current job count.
pub fn build_system_prompt(profile: &UserProfile, market: &MarketSnapshot) -> String {
    let job_count = market
        .job_count
        .map(|c| c.to_string())
        .unwrap_or_else(|| UNKNOWN_JOB_COUNT.to_string());

    fill_placeholders(
        CHAT_SYSTEM_TEMPLATE,
        &[
            ("name", profile.display_name().unwrap_or(UNKNOWN_NAME)),
            ("role", profile.role_label().unwrap_or(UNKNOWN_ROLE)),
            ("job_count", job_count.as_str()),
        ],
    )
}
