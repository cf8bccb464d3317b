use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::freelancer::FreelancerDto;
use crate::models::job::{JobDto, SearchDto};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantsQuery {
    pub job_id: i64,
}

/// GET /api/getJobs
pub async fn handle_get_jobs(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
) -> Result<Json<Vec<JobDto>>, AppError> {
    let jobs = state.jobs.all_jobs(&username).await?;
    Ok(Json(jobs))
}

/// GET /api/getApplicants?jobId=
pub async fn handle_get_applicants(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Query(params): Query<ApplicantsQuery>,
) -> Result<Json<Vec<FreelancerDto>>, AppError> {
    let applicants = state.jobs.applicants(&username, params.job_id).await?;
    Ok(Json(applicants))
}

/// POST /api/searchJob
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(criteria): Json<SearchDto>,
) -> Result<Json<Vec<JobDto>>, AppError> {
    let jobs = state.jobs.search_jobs(&username, &criteria).await?;
    Ok(Json(jobs))
}
