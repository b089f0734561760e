//! Axum route handlers for job search.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::client::JobQuery;
use crate::jobs::mapping::JobMatch;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobMatch>,
}

/// GET /api/v1/jobs/search?role=&skill=&location=
pub async fn handle_job_search(
    State(state): State<AppState>,
    params: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let Query(query) = params?;

    if query.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let jobs = state.jobs.search(&query).await;
    Ok(Json(JobSearchResponse { jobs }))
}
