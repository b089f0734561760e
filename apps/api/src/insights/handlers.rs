//! Axum route handlers for the static insight panels.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::insights::migration::{migration_trends, tracked_companies, MigrationTrends};
use crate::insights::salary::{estimate_salary, SalaryData};
use crate::insights::skills::{analyze_skill_gap, SkillGapReport};

#[derive(Debug, Deserialize)]
pub struct SalaryQuery {
    pub role: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub experience: u32,
}

fn default_location() -> String {
    "Remote".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackedCompaniesResponse {
    pub companies: Vec<&'static str>,
}

/// GET /api/v1/salary?role=&location=&experience=
pub async fn handle_salary(
    params: Result<Query<SalaryQuery>, QueryRejection>,
) -> Result<Json<SalaryData>, AppError> {
    let Query(query) = params?;
    let role = query.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    Ok(Json(estimate_salary(role, query.location.trim(), query.experience)))
}

/// GET /api/v1/migration
pub async fn handle_tracked_companies() -> Json<TrackedCompaniesResponse> {
    Json(TrackedCompaniesResponse {
        companies: tracked_companies(),
    })
}

/// GET /api/v1/migration/:company
pub async fn handle_migration(Path(company): Path<String>) -> Json<MigrationTrends> {
    Json(migration_trends(&company))
}

/// POST /api/v1/skills/gap
pub async fn handle_skill_gap(
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<SkillGapReport>, AppError> {
    let Json(request) = payload?;
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    Ok(Json(analyze_skill_gap(role, &request.skills)))
}
