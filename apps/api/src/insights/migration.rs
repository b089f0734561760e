//! Company migration trends: where people leaving a company go next.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub company: String,
    pub count: u32,
    /// Share of all exits, in percent.
    pub percentage: f64,
    /// Average salary change on moving, in percent.
    pub avg_salary_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationTrends {
    pub company: String,
    pub total_exits: u32,
    pub destinations: Vec<Destination>,
}

type DestinationRow = (&'static str, u32, f64, f64);

const DEFAULT_TOTAL_EXITS: u32 = 450;
const DEFAULT_DESTINATIONS: &[DestinationRow] = &[("Google", 45, 10.0, 20.0)];

const COMPANY_TRENDS: &[(&str, u32, &[DestinationRow])] = &[
    (
        "Microsoft",
        1250,
        &[
            ("Google", 180, 14.4, 22.5),
            ("Amazon", 150, 12.0, 18.0),
            ("Meta", 120, 9.6, 25.0),
            ("OpenAI", 45, 3.6, 35.0),
        ],
    ),
    (
        "Google",
        1100,
        &[
            ("Meta", 140, 12.7, 18.5),
            ("OpenAI", 95, 8.6, 32.0),
            ("Anthropic", 60, 5.5, 30.0),
            ("Stripe", 55, 5.0, 15.0),
        ],
    ),
    (
        "Meta",
        980,
        &[
            ("Google", 130, 13.3, 12.0),
            ("OpenAI", 85, 8.7, 30.0),
            ("Apple", 70, 7.1, 10.5),
        ],
    ),
    (
        "Amazon",
        1600,
        &[
            ("Microsoft", 210, 13.1, 15.0),
            ("Google", 190, 11.9, 20.0),
            ("Stripe", 60, 3.8, 18.0),
        ],
    ),
    (
        "Apple",
        720,
        &[
            ("Google", 90, 12.5, 14.0),
            ("Meta", 75, 10.4, 19.0),
            ("Tesla", 40, 5.6, 8.0),
        ],
    ),
    (
        "Netflix",
        310,
        &[
            ("Stripe", 35, 11.3, 5.0),
            ("Google", 30, 9.7, 2.0),
            ("Anthropic", 18, 5.8, 12.0),
        ],
    ),
];

/// Migration trends for `company`, or the default record when it is not tracked.
/// The returned record always names the requested company.
pub fn migration_trends(company: &str) -> MigrationTrends {
    let (total_exits, rows) = COMPANY_TRENDS
        .iter()
        .find(|(name, _, _)| *name == company)
        .map(|(_, exits, rows)| (*exits, *rows))
        .unwrap_or((DEFAULT_TOTAL_EXITS, DEFAULT_DESTINATIONS));

    MigrationTrends {
        company: company.to_string(),
        total_exits,
        destinations: rows
            .iter()
            .map(|(name, count, percentage, increase)| Destination {
                company: name.to_string(),
                count: *count,
                percentage: *percentage,
                avg_salary_increase: *increase,
            })
            .collect(),
    }
}

/// Companies with tracked trends, in table order.
pub fn tracked_companies() -> Vec<&'static str> {
    COMPANY_TRENDS.iter().map(|(name, _, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_company_returns_default_record() {
        let trends = migration_trends("Initech");
        assert_eq!(trends.company, "Initech");
        assert_eq!(trends.total_exits, 450);
        assert_eq!(
            trends.destinations,
            vec![Destination {
                company: "Google".to_string(),
                count: 45,
                percentage: 10.0,
                avg_salary_increase: 20.0,
            }]
        );
    }

    #[test]
    fn test_known_company_lookup() {
        let trends = migration_trends("Microsoft");
        assert_eq!(trends.total_exits, 1250);
        assert_eq!(trends.destinations[0].company, "Google");
        assert_eq!(trends.destinations.len(), 4);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(migration_trends("microsoft").total_exits, DEFAULT_TOTAL_EXITS);
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        for company in tracked_companies().into_iter().chain(["Nobody"]) {
            assert_eq!(migration_trends(company), migration_trends(company));
        }
    }

    #[test]
    fn test_destination_counts_never_exceed_exits() {
        for company in tracked_companies() {
            let trends = migration_trends(company);
            let moved: u32 = trends.destinations.iter().map(|d| d.count).sum();
            assert!(moved <= trends.total_exits, "{company}");
        }
    }
}
