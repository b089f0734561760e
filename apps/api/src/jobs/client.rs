//! Job search client: wraps the third-party job-search API.
//!
//! Each search is attempted exactly once. `search` never fails: any error is
//! logged and replaced by the single fallback match.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::jobs::mapping::{fallback_match, map_results, JobMatch, SearchResponse};

pub const DEFAULT_LOCATION: &str = "United States";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("job search API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },
}

/// Search parameters, as sent by the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    pub role: String,
    pub skill: Option<String>,
    pub location: Option<String>,
}

impl JobQuery {
    /// Free-text query: the role followed by the first skill, if any.
    pub fn search_text(&self) -> String {
        let role = self.role.trim();
        match self.skill.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(skill) => format!("{role} {skill}"),
            None => role.to_string(),
        }
    }

    pub fn location_or_default(&self) -> &str {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
    }
}

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    api_key: Option<String>,
    api_host: String,
    endpoint: String,
}

impl JobSearchClient {
    pub fn new(api_key: Option<String>, api_host: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            api_host,
            endpoint,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.job_search_api_key.clone(),
            config.job_search_api_host.clone(),
            config.job_search_api_url.clone(),
        )
    }

    /// Returns up to five matches, or exactly one fallback match on any failure.
    pub async fn search(&self, query: &JobQuery) -> Vec<JobMatch> {
        match self.try_search(query).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Job search failed, returning fallback match: {e}");
                vec![fallback_match()]
            }
        }
    }

    async fn try_search(&self, query: &JobQuery) -> Result<Vec<JobMatch>, JobSearchError> {
        let api_key = self.api_key.as_deref().ok_or(JobSearchError::MissingApiKey)?;
        let text = query.search_text();

        let response = self
            .client
            .get(&self.endpoint)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&[
                ("query", text.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("location", query.location_or_default()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Api {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("Job search for '{text}' returned {} results", body.data.len());

        Ok(map_results(&body.data, Utc::now()))
    }
}
