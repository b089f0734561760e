//! Reshapes raw job-search results into the cards the dashboard renders.
//!
//! Match scores and fallback posting ages are derived from a SHA-256 of the
//! job id, so the same listing always renders the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Results kept from each search.
pub const MAX_RESULTS: usize = 5;
/// Skills reported per match.
const MAX_SKILLS: usize = 4;
const MATCH_FLOOR: u8 = 75;
const MATCH_SPAN: u64 = 20;
const MAX_SYNTHETIC_DAYS: u64 = 7;

/// Vocabulary searched for in job descriptions.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "AWS",
    "SQL",
    "Docker",
    "Kubernetes",
    "GraphQL",
];

/// A single listing as returned by the job-search API. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawJob {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_description: Option<String>,
    pub job_posted_at_datetime_utc: Option<String>,
    pub job_posted_at_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub data: Vec<RawJob>,
}

/// A job card rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub skills: Vec<String>,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub posted: String,
}

/// The single record returned whenever a search cannot complete.
pub fn fallback_match() -> JobMatch {
    JobMatch {
        id: "fallback-1".to_string(),
        title: "Senior Software Engineer".to_string(),
        company: "TechCorp Inc.".to_string(),
        location: "Remote".to_string(),
        salary: "$120,000 - $160,000".to_string(),
        skills: ["JavaScript", "React", "Node.js", "TypeScript"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        match_score: 87,
        posted: "2 days ago".to_string(),
    }
}

/// Maps the first `MAX_RESULTS` raw listings into job cards.
pub fn map_results(raw: &[RawJob], now: DateTime<Utc>) -> Vec<JobMatch> {
    raw.iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(index, job)| map_job(job, index, now))
        .collect()
}

fn map_job(job: &RawJob, index: usize, now: DateTime<Utc>) -> JobMatch {
    let title = job.job_title.clone().unwrap_or_else(|| "Untitled role".to_string());
    let company = job
        .employer_name
        .clone()
        .unwrap_or_else(|| "Unknown company".to_string());
    let id = job
        .job_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| format!("job-{index}-{title}-{company}"));

    let digest = id_digest(&id);
    let posted = posted_at(job)
        .and_then(|posted| days_ago(posted, now))
        .map(format_days_ago)
        .unwrap_or_else(|| format_days_ago(synthetic_days(digest)));

    JobMatch {
        location: format_location(job.job_city.as_deref(), job.job_state.as_deref()),
        salary: format_salary(job.job_min_salary, job.job_max_salary),
        skills: extract_skills(job.job_description.as_deref().unwrap_or_default()),
        match_score: match_score(digest),
        id,
        title,
        company,
        posted,
    }
}

/// "City, ST", whichever part is present, or "Remote".
pub fn format_location(city: Option<&str>, state: Option<&str>) -> String {
    let city = city.map(str::trim).filter(|c| !c.is_empty());
    let state = state.map(str::trim).filter(|s| !s.is_empty());
    match (city, state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => "Remote".to_string(),
    }
}

pub fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min > 0.0 && max > 0.0 => {
            format!("{} - {}", format_usd(min), format_usd(max))
        }
        _ => "Salary not specified".to_string(),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$120,000`.
pub fn format_usd(amount: f64) -> String {
    let digits = (amount.round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Up to four vocabulary skills mentioned in the description, in vocabulary order.
pub fn extract_skills(description: &str) -> Vec<String> {
    let description = description.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| description.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|skill| skill.to_string())
        .collect()
}

fn id_digest(id: &str) -> u64 {
    let hash = Sha256::digest(id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash[..8]);
    u64::from_be_bytes(prefix)
}

/// Display score in `[75, 95)`.
fn match_score(digest: u64) -> u8 {
    MATCH_FLOOR + (digest % MATCH_SPAN) as u8
}

/// Stand-in posting age in `[1, 7]` days.
fn synthetic_days(digest: u64) -> i64 {
    1 + ((digest >> 32) % MAX_SYNTHETIC_DAYS) as i64
}

fn posted_at(job: &RawJob) -> Option<DateTime<Utc>> {
    job.job_posted_at_datetime_utc
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            job.job_posted_at_timestamp
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
        })
}

/// Whole days since posting; `None` for timestamps in the future.
fn days_ago(posted: DateTime<Utc>, now: DateTime<Utc>) -> Option<i64> {
    let days = (now - posted).num_days();
    (posted <= now).then_some(days)
}

fn format_days_ago(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{n} days ago"),
    }
}
