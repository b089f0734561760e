//! Salary estimate calculator.
//!
//! current = base(role) × multiplier(location) × (1 + 0.08 × years)

use serde::{Deserialize, Serialize};

/// Base used for roles missing from the table.
pub const DEFAULT_BASE_SALARY: f64 = 75_000.0;
/// Multiplier used for locations missing from the table.
pub const DEFAULT_LOCATION_MULTIPLIER: f64 = 1.0;
/// Raise per year of experience.
pub const EXPERIENCE_STEP: f64 = 0.08;

const ROLE_BASE_SALARIES: &[(&str, f64)] = &[
    ("Software Developer", 85_000.0),
    ("Software Engineer", 95_000.0),
    ("Senior Software Engineer", 130_000.0),
    ("Frontend Developer", 80_000.0),
    ("Backend Developer", 90_000.0),
    ("Full Stack Developer", 88_000.0),
    ("Data Scientist", 105_000.0),
    ("Data Engineer", 100_000.0),
    ("DevOps Engineer", 100_000.0),
    ("Machine Learning Engineer", 120_000.0),
    ("Product Manager", 110_000.0),
    ("UX Designer", 78_000.0),
];

const LOCATION_MULTIPLIERS: &[(&str, f64)] = &[
    ("San Francisco", 1.4),
    ("New York", 1.3),
    ("Seattle", 1.25),
    ("Boston", 1.2),
    ("Los Angeles", 1.15),
    ("Austin", 1.1),
    ("Denver", 1.05),
    ("Chicago", 1.05),
    ("Remote", 1.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPercentiles {
    #[serde(rename = "25")]
    pub p25: u64,
    #[serde(rename = "50")]
    pub p50: u64,
    #[serde(rename = "75")]
    pub p75: u64,
    #[serde(rename = "90")]
    pub p90: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryData {
    pub role: String,
    pub location: String,
    pub experience_years: u32,
    pub current: u64,
    pub percentiles: SalaryPercentiles,
}

pub fn base_salary(role: &str) -> f64 {
    lookup(ROLE_BASE_SALARIES, role).unwrap_or(DEFAULT_BASE_SALARY)
}

pub fn location_multiplier(location: &str) -> f64 {
    lookup(LOCATION_MULTIPLIERS, location).unwrap_or(DEFAULT_LOCATION_MULTIPLIER)
}

pub fn experience_multiplier(years: u32) -> f64 {
    1.0 + EXPERIENCE_STEP * f64::from(years)
}

/// Estimates the salary for a role, location and years of experience.
pub fn estimate_salary(role: &str, location: &str, years: u32) -> SalaryData {
    let current =
        (base_salary(role) * location_multiplier(location) * experience_multiplier(years)).round();

    SalaryData {
        role: role.to_string(),
        location: location.to_string(),
        experience_years: years,
        current: current as u64,
        percentiles: SalaryPercentiles {
            p25: (current * 0.85).round() as u64,
            p50: current as u64,
            p75: (current * 1.15).round() as u64,
            p90: (current * 1.3).round() as u64,
        },
    }
}

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_developer_san_francisco_five_years() {
        let data = estimate_salary("Software Developer", "San Francisco", 5);
        assert_eq!(data.current, 166_600);
        assert_eq!(data.percentiles.p50, 166_600);
        assert_eq!(data.percentiles.p75, (166_600.0_f64 * 1.15).round() as u64);
        assert_eq!(data.percentiles.p90, (166_600.0_f64 * 1.3).round() as u64);
        assert_eq!(data.percentiles.p25, (166_600.0_f64 * 0.85).round() as u64);
    }

    #[test]
    fn test_unknown_role_and_location_use_defaults() {
        let data = estimate_salary("Astronaut", "Atlantis", 0);
        assert_eq!(data.current, 75_000);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(base_salary("software developer"), DEFAULT_BASE_SALARY);
        assert_eq!(location_multiplier("san francisco"), DEFAULT_LOCATION_MULTIPLIER);
    }

    #[test]
    fn test_monotonic_in_experience() {
        for (role, location) in [
            ("Software Developer", "San Francisco"),
            ("Data Scientist", "Remote"),
            ("Unknown", "Nowhere"),
        ] {
            let mut previous = estimate_salary(role, location, 0).current;
            for years in 1..=40 {
                let current = estimate_salary(role, location, years).current;
                assert!(current > previous, "{role}/{location} at {years}y");
                previous = current;
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            estimate_salary("Product Manager", "Boston", 3),
            estimate_salary("Product Manager", "Boston", 3)
        );
    }

    #[test]
    fn test_percentiles_serialize_with_numeric_keys() {
        let json = serde_json::to_value(estimate_salary("Software Developer", "San Francisco", 5))
            .unwrap();
        assert_eq!(json["percentiles"]["50"], 166_600);
    }
}
