//! Canned chat replies.
//!
//! Two families exist:
//! - greeting/insight templates, used when the resolver is configured for mock mode;
//! - keyword replies, used when a live call fails.

use crate::llm_client::prompts::fill_placeholders;
use crate::models::profile::{MarketSnapshot, UserProfile};

/// Salary quoted when the dashboard has not supplied one.
pub const DEFAULT_SALARY: u64 = 95_000;

pub const GENERIC_HELP: &str = "I can help you with job searches, salary insights, \
    skill gap analysis, and career migration trends. What would you like to know?";

const JOB_KEYWORDS: &[&str] = &["job", "opening", "position"];
const SALARY_KEYWORDS: &[&str] = &["salary", "compensation"];

const NAME_FALLBACK: &str = "there";
const ROLE_FALLBACK: &str = "professional";

/// Greeting/insight pool. `{name}` and `{role}` are substituted per call.
pub const MOCK_TEMPLATES: [&str; 5] = [
    "Hi {name}! Demand for {role} roles is strong right now. Want me to pull up the latest matches?",
    "Great question, {name}. Market data shows pay for {role} positions climbing about 8% year over year.",
    "Good news, {name}: companies are actively hiring for {role} roles. Updating your skills profile could improve your match scores.",
    "Thanks for asking, {name}. Many people in {role} positions are moving to high-growth companies. The migration trends panel has the details.",
    "Hello {name}! I can compare salaries, find openings and map skill gaps for {role} career paths. Where should we start?",
];

/// Renders the mock template at `index` for the given profile.
pub fn mock_reply(index: usize, profile: &UserProfile) -> String {
    fill_placeholders(
        MOCK_TEMPLATES[index % MOCK_TEMPLATES.len()],
        &[
            ("name", profile.display_name().unwrap_or(NAME_FALLBACK)),
            ("role", profile.role_label().unwrap_or(ROLE_FALLBACK)),
        ],
    )
}

/// Keyword-matched reply used when the live backend cannot answer.
/// Job keywords win over salary keywords.
pub fn keyword_reply(message: &str, market: &MarketSnapshot) -> String {
    let message = message.to_lowercase();

    if contains_any(&message, JOB_KEYWORDS) {
        let count = market.job_count.unwrap_or(0);
        format!(
            "I found {count} job opportunities that match your profile. \
            Would you like to see the top matches?"
        )
    } else if contains_any(&message, SALARY_KEYWORDS) {
        let salary = market.current_salary.unwrap_or(DEFAULT_SALARY);
        format!(
            "Based on current market data, your estimated salary is ${salary}. \
            Top performers in your role earn 15-30% more."
        )
    } else {
        GENERIC_HELP.to_string()
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
