use serde::{Deserialize, Serialize};

/// The dashboard user's profile. Every field may be missing while the
/// dashboard is still loading, so readers apply their own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl UserProfile {
    /// Display name, or `None` when absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Role label, or `None` when absent or blank.
    pub fn role_label(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }
}

/// Market figures available to the dashboard at call time.
/// `job_count` is absent during the initial load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketSnapshot {
    pub job_count: Option<u32>,
    pub current_salary: Option<u64>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
