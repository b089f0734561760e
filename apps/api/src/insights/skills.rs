//! Skill gap analysis for a target role, plus market positioning of the
//! user's current skills.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demand {
    High,
    Medium,
    Low,
}

/// A skill the target role expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub demand: Demand,
    /// Estimated weeks to reach a working level.
    pub learning_weeks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    High,
    Medium,
    Developing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub high_demand: Vec<String>,
    pub emerging: Vec<String>,
    pub stable_core: Vec<String>,
    pub declining: Vec<String>,
    pub missing_high_value: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPositioning {
    pub categories: SkillCategories,
    pub positioning_score: i32,
    pub readiness: Readiness,
    /// Holds at least one emerging skill.
    pub competitive_advantage: bool,
    /// Holds at least one declining skill.
    pub modernization_needed: bool,
}

/// A missing skill ranked by demand against learning time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPriority {
    pub skill: String,
    pub priority_score: i32,
    pub learning_weeks: u32,
    /// Market demand weight, 1–10.
    pub market_demand: u32,
    pub priority_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiRecommendation {
    #[serde(rename = "High Priority")]
    High,
    #[serde(rename = "Medium Priority")]
    Medium,
}

impl RoiRecommendation {
    pub fn for_score(roi_score: f64) -> Self {
        if roi_score > HIGH_ROI_THRESHOLD {
            Self::High
        } else {
            Self::Medium
        }
    }
}

/// Return on learning a high-value skill the user does not hold yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRoi {
    pub skill: String,
    pub salary_increase: u32,
    pub job_opportunities: String,
    pub learning_weeks: u32,
    /// Salary increase per week of learning.
    pub roi_score: f64,
    pub payback_period_months: f64,
    pub recommendation: RoiRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub role: String,
    pub matched: Vec<SkillRequirement>,
    pub missing: Vec<SkillRequirement>,
    /// Share of required skills already held, 0–100.
    pub coverage: u32,
    /// Total weeks to close every gap.
    pub weeks_to_close: u32,
    /// Missing skills, highest priority first.
    pub priorities: Vec<SkillPriority>,
    pub roi: Vec<SkillRoi>,
    pub positioning: MarketPositioning,
}

type RequirementRow = (&'static str, Demand, u32);

const DEFAULT_REQUIREMENTS: &[RequirementRow] = &[
    ("Git", Demand::High, 1),
    ("SQL", Demand::High, 4),
    ("Python", Demand::High, 6),
    ("Cloud Fundamentals", Demand::Medium, 4),
    ("Communication", Demand::Medium, 2),
];

const ROLE_REQUIREMENTS: &[(&str, &[RequirementRow])] = &[
    (
        "Software Engineer",
        &[
            ("JavaScript", Demand::High, 4),
            ("TypeScript", Demand::High, 3),
            ("React", Demand::High, 4),
            ("Node.js", Demand::Medium, 4),
            ("SQL", Demand::Medium, 4),
            ("AWS", Demand::Medium, 6),
        ],
    ),
    (
        "Senior Software Engineer",
        &[
            ("TypeScript", Demand::High, 3),
            ("System Design", Demand::High, 8),
            ("AWS", Demand::High, 6),
            ("Kubernetes", Demand::Medium, 8),
            ("Mentoring", Demand::Medium, 4),
        ],
    ),
    (
        "Data Scientist",
        &[
            ("Python", Demand::High, 4),
            ("SQL", Demand::High, 4),
            ("Machine Learning", Demand::High, 12),
            ("Statistics", Demand::High, 8),
            ("Spark", Demand::Medium, 6),
        ],
    ),
    (
        "DevOps Engineer",
        &[
            ("Kubernetes", Demand::High, 8),
            ("Docker", Demand::High, 3),
            ("AWS", Demand::High, 6),
            ("Terraform", Demand::Medium, 4),
            ("Python", Demand::Low, 4),
        ],
    ),
    (
        "Machine Learning Engineer",
        &[
            ("Python", Demand::High, 4),
            ("Machine Learning", Demand::High, 12),
            ("PyTorch", Demand::High, 8),
            ("Vector Databases", Demand::Medium, 3),
            ("Kubernetes", Demand::Low, 8),
        ],
    ),
    (
        "Product Manager",
        &[
            ("Roadmapping", Demand::High, 4),
            ("SQL", Demand::Medium, 4),
            ("User Research", Demand::High, 4),
            ("Analytics", Demand::Medium, 3),
        ],
    ),
];

const HIGH_DEMAND: &[&str] = &[
    "TypeScript",
    "React",
    "AWS",
    "Kubernetes",
    "Machine Learning",
    "Python",
];
const EMERGING: &[&str] = &[
    "WebAssembly",
    "Rust",
    "Edge Computing",
    "LangChain",
    "Vector Databases",
];
const DECLINING: &[&str] = &["jQuery", "Flash", "Perl"];
const STABLE_CORE: &[&str] = &["JavaScript", "SQL", "Git", "HTML/CSS"];

const DEFAULT_DEMAND_WEIGHT: u32 = 5;
const DEMAND_WEIGHTS: &[(&str, u32)] = &[
    ("TypeScript", 9),
    ("React", 9),
    ("AWS", 10),
    ("Python", 8),
    ("Node.js", 7),
    ("Docker", 8),
    ("Kubernetes", 9),
    ("Machine Learning", 10),
    ("SQL", 6),
    ("Git", 5),
];

const HIGH_ROI_THRESHOLD: f64 = 1500.0;
const WEEKS_PER_MONTH: f64 = 4.33;

/// (skill, salary increase in USD, job-opportunity change, learning weeks)
const HIGH_ROI_SKILLS: &[(&str, u32, &str, u32)] = &[
    ("AWS", 12000, "+40%", 6),
    ("TypeScript", 8000, "+25%", 3),
    ("React", 10000, "+35%", 4),
    ("Kubernetes", 15000, "+50%", 8),
    ("Machine Learning", 20000, "+60%", 12),
];

/// Compares `current_skills` with what `role` expects. Unknown roles use a
/// general-purpose requirement set. Skill comparison ignores case.
pub fn analyze_skill_gap(role: &str, current_skills: &[String]) -> SkillGapReport {
    let rows = ROLE_REQUIREMENTS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, rows)| *rows)
        .unwrap_or(DEFAULT_REQUIREMENTS);

    let (matched, missing): (Vec<SkillRequirement>, Vec<SkillRequirement>) = rows
        .iter()
        .map(|(skill, demand, weeks)| SkillRequirement {
            skill: skill.to_string(),
            demand: *demand,
            learning_weeks: *weeks,
        })
        .partition(|req| has_skill(current_skills, &req.skill));

    let coverage = ((matched.len() as f64 / rows.len() as f64) * 100.0).round() as u32;
    let weeks_to_close = missing.iter().map(|r| r.learning_weeks).sum();

    SkillGapReport {
        role: role.to_string(),
        priorities: prioritize_skills(&missing),
        roi: skill_roi(current_skills),
        matched,
        missing,
        coverage,
        weeks_to_close,
        positioning: market_positioning(current_skills),
    }
}

/// Ranks `missing` by `demand_weight * 10 - learning_weeks`, highest first.
/// Ties keep table order.
pub fn prioritize_skills(missing: &[SkillRequirement]) -> Vec<SkillPriority> {
    let mut priorities: Vec<SkillPriority> = missing
        .iter()
        .map(|req| {
            let demand = demand_weight(&req.skill);
            SkillPriority {
                skill: req.skill.clone(),
                priority_score: demand as i32 * 10 - req.learning_weeks as i32,
                learning_weeks: req.learning_weeks,
                market_demand: demand,
                priority_reason: priority_reason(demand, req.learning_weeks).to_string(),
            }
        })
        .collect();

    priorities.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    priorities
}

fn demand_weight(skill: &str) -> u32 {
    DEMAND_WEIGHTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(skill))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_DEMAND_WEIGHT)
}

fn priority_reason(demand: u32, learning_weeks: u32) -> &'static str {
    match (demand, learning_weeks) {
        (d, _) if d >= 9 => "Critical high-demand skill with strong ROI",
        (_, w) if w <= 2 => "Quick win - can be learned rapidly",
        (d, _) if d >= 7 => "Solid market demand with good career impact",
        _ => "Important foundational skill for target roles",
    }
}

/// ROI of each high-value skill not already held, in table order.
pub fn skill_roi(current_skills: &[String]) -> Vec<SkillRoi> {
    HIGH_ROI_SKILLS
        .iter()
        .filter(|(skill, _, _, _)| !has_skill(current_skills, skill))
        .map(|(skill, increase, opportunities, weeks)| {
            let roi_score = *increase as f64 / *weeks as f64;
            SkillRoi {
                skill: skill.to_string(),
                salary_increase: *increase,
                job_opportunities: opportunities.to_string(),
                learning_weeks: *weeks,
                roi_score,
                payback_period_months: (*weeks as f64 / WEEKS_PER_MONTH * 10.0).round() / 10.0,
                recommendation: RoiRecommendation::for_score(roi_score),
            }
        })
        .collect()
}

/// Buckets skills by market category and scores the mix:
/// 10 per high-demand, 8 per emerging, 5 per stable-core, minus 3 per declining.
pub fn market_positioning(current_skills: &[String]) -> MarketPositioning {
    let mut categories = SkillCategories::default();

    for skill in current_skills {
        if contains_ci(HIGH_DEMAND, skill) {
            categories.high_demand.push(skill.clone());
        } else if contains_ci(EMERGING, skill) {
            categories.emerging.push(skill.clone());
        } else if contains_ci(DECLINING, skill) {
            categories.declining.push(skill.clone());
        } else if contains_ci(STABLE_CORE, skill) {
            categories.stable_core.push(skill.clone());
        }
    }

    categories.missing_high_value = HIGH_DEMAND
        .iter()
        .filter(|s| !has_skill(current_skills, s))
        .map(|s| s.to_string())
        .collect();

    let positioning_score = categories.high_demand.len() as i32 * 10
        + categories.emerging.len() as i32 * 8
        + categories.stable_core.len() as i32 * 5
        - categories.declining.len() as i32 * 3;

    let readiness = match positioning_score {
        s if s > 30 => Readiness::High,
        s if s > 15 => Readiness::Medium,
        _ => Readiness::Developing,
    };

    MarketPositioning {
        competitive_advantage: !categories.emerging.is_empty(),
        modernization_needed: !categories.declining.is_empty(),
        categories,
        positioning_score,
        readiness,
    }
}

fn has_skill(current_skills: &[String], skill: &str) -> bool {
    current_skills
        .iter()
        .any(|s| s.trim().eq_ignore_ascii_case(skill))
}

fn contains_ci(list: &[&str], skill: &str) -> bool {
    list.iter().any(|s| s.eq_ignore_ascii_case(skill.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_role_splits_matched_and_missing() {
        let report = analyze_skill_gap("Data Scientist", &skills(&["python", "SQL"]));
        assert_eq!(report.matched.len(), 2);
        assert_eq!(report.missing.len(), 3);
        assert_eq!(report.coverage, 40);
        assert_eq!(report.weeks_to_close, 12 + 8 + 6);
    }

    #[test]
    fn test_unknown_role_uses_default_requirements() {
        let report = analyze_skill_gap("Lighthouse Keeper", &[]);
        assert_eq!(report.role, "Lighthouse Keeper");
        assert_eq!(report.missing.len(), DEFAULT_REQUIREMENTS.len());
        assert_eq!(report.coverage, 0);
    }

    #[test]
    fn test_full_coverage() {
        let report = analyze_skill_gap(
            "Product Manager",
            &skills(&["Roadmapping", "SQL", "User Research", "Analytics"]),
        );
        assert_eq!(report.coverage, 100);
        assert!(report.missing.is_empty());
        assert_eq!(report.weeks_to_close, 0);
    }

    #[test]
    fn test_positioning_score_and_readiness() {
        // 3 high-demand (30) + 1 emerging (8) + 1 stable (5) - 1 declining (3) = 40
        let positioning =
            market_positioning(&skills(&["Python", "React", "AWS", "Rust", "Git", "jQuery"]));
        assert_eq!(positioning.positioning_score, 40);
        assert_eq!(positioning.readiness, Readiness::High);
        assert_eq!(positioning.categories.declining, vec!["jQuery"]);
        assert_eq!(
            positioning.categories.missing_high_value,
            vec!["TypeScript", "Kubernetes", "Machine Learning"]
        );
    }

    #[test]
    fn test_readiness_thresholds() {
        // 2 high-demand = 20 → Medium
        assert_eq!(
            market_positioning(&skills(&["Python", "React"])).readiness,
            Readiness::Medium
        );
        // 1 stable = 5 → Developing
        assert_eq!(
            market_positioning(&skills(&["SQL"])).readiness,
            Readiness::Developing
        );
    }

    #[test]
    fn test_positioning_flags() {
        let mixed = market_positioning(&skills(&["Rust", "jQuery"]));
        assert!(mixed.competitive_advantage);
        assert!(mixed.modernization_needed);

        let core = market_positioning(&skills(&["SQL", "Python"]));
        assert!(!core.competitive_advantage);
        assert!(!core.modernization_needed);
    }

    #[test]
    fn test_missing_skills_ranked_by_priority() {
        let report = analyze_skill_gap("Senior Software Engineer", &[]);
        let ranked: Vec<(&str, i32)> = report
            .priorities
            .iter()
            .map(|p| (p.skill.as_str(), p.priority_score))
            .collect();
        // AWS 10*10-6, TypeScript 9*10-3, Kubernetes 9*10-8, Mentoring 5*10-4, System Design 5*10-8
        assert_eq!(
            ranked,
            vec![
                ("AWS", 94),
                ("TypeScript", 87),
                ("Kubernetes", 82),
                ("Mentoring", 46),
                ("System Design", 42),
            ]
        );
        assert_eq!(report.priorities[0].market_demand, 10);
    }

    #[test]
    fn test_priorities_cover_only_missing_skills() {
        let report = analyze_skill_gap("DevOps Engineer", &skills(&["docker", "AWS"]));
        let names: Vec<&str> = report.priorities.iter().map(|p| p.skill.as_str()).collect();
        assert_eq!(names, vec!["Kubernetes", "Python", "Terraform"]);
    }

    #[test]
    fn test_priority_reasons() {
        let reason = |skill: &str, weeks: u32| {
            prioritize_skills(&[SkillRequirement {
                skill: skill.to_string(),
                demand: Demand::Medium,
                learning_weeks: weeks,
            }])[0]
                .priority_reason
                .clone()
        };
        assert!(reason("AWS", 6).starts_with("Critical"));
        assert!(reason("Git", 1).starts_with("Quick win"));
        assert!(reason("Node.js", 4).starts_with("Solid"));
        assert!(reason("Mentoring", 4).starts_with("Important foundational"));
    }

    #[test]
    fn test_roi_skips_held_skills_and_keeps_table_order() {
        let roi = skill_roi(&skills(&["aws", "React"]));
        let names: Vec<&str> = roi.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "Kubernetes", "Machine Learning"]);

        let typescript = &roi[0];
        assert!((typescript.roi_score - 8000.0 / 3.0).abs() < 1e-9);
        assert_eq!(typescript.payback_period_months, 0.7);
        assert_eq!(typescript.recommendation, RoiRecommendation::High);
        assert_eq!(roi[1].payback_period_months, 1.8);
        assert_eq!(roi[2].payback_period_months, 2.8);
    }

    #[test]
    fn test_roi_recommendation_threshold() {
        assert_eq!(RoiRecommendation::for_score(1500.1), RoiRecommendation::High);
        assert_eq!(RoiRecommendation::for_score(1500.0), RoiRecommendation::Medium);
        assert_eq!(
            serde_json::to_value(RoiRecommendation::High).unwrap(),
            "High Priority"
        );
    }

    #[test]
    fn test_unknown_skills_are_uncategorized() {
        let positioning = market_positioning(&skills(&["Cobol"]));
        assert_eq!(positioning.positioning_score, 0);
        assert!(positioning.categories.high_demand.is_empty());
        assert_eq!(positioning.categories.missing_high_value.len(), HIGH_DEMAND.len());
    }
}
