use anyhow::{Context, Result};

pub const DEFAULT_CHAT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_JOB_SEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";
pub const DEFAULT_JOB_SEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";

/// Application configuration loaded from environment variables.
/// Both upstream credentials are optional; their absence switches the
/// matching service to its offline behaviour.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub chat_api_key: Option<String>,
    pub chat_api_url: String,
    pub chat_model: String,
    /// Hostname the dashboard is served from. Static hosting disables live chat.
    pub deploy_host: Option<String>,
    /// Fixes the canned-reply sequence in mock mode when set.
    pub chat_mock_seed: Option<u64>,
    pub job_search_api_key: Option<String>,
    pub job_search_api_host: String,
    pub job_search_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chat_api_key: optional_env("CHAT_API_KEY"),
            chat_api_url: env_or("CHAT_API_URL", DEFAULT_CHAT_API_URL),
            chat_model: env_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            deploy_host: optional_env("DEPLOY_HOST"),
            chat_mock_seed: optional_env("CHAT_MOCK_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("CHAT_MOCK_SEED must be an unsigned integer")?,
            job_search_api_key: optional_env("JOB_SEARCH_API_KEY"),
            job_search_api_host: env_or("JOB_SEARCH_API_HOST", DEFAULT_JOB_SEARCH_API_HOST),
            job_search_api_url: env_or("JOB_SEARCH_API_URL", DEFAULT_JOB_SEARCH_API_URL),
        })
    }
}

/// Reads an env var, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Offline configuration: no credentials, default endpoints.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            chat_api_key: None,
            chat_api_url: DEFAULT_CHAT_API_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            deploy_host: None,
            chat_mock_seed: None,
            job_search_api_key: None,
            job_search_api_host: DEFAULT_JOB_SEARCH_API_HOST.to_string(),
            job_search_api_url: DEFAULT_JOB_SEARCH_API_URL.to_string(),
        }
    }
}
