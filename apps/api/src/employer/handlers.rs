use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::employer::EmployerDto;
use crate::models::freelancer::FreelancerDto;
use crate::models::job::JobDto;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobIdFilter {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeNameFilter {
    pub name: Option<String>,
}

/// POST /api/employer/create
pub async fn handle_create(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(dto): Json<EmployerDto>,
) -> Result<String, AppError> {
    state.employers.create_employer(&username, dto).await
}

/// PUT /api/employer/update
pub async fn handle_update(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(dto): Json<EmployerDto>,
) -> Result<String, AppError> {
    state.employers.update_employer(&username, dto).await
}

/// DELETE /api/employer/delete
pub async fn handle_delete(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
) -> Result<String, AppError> {
    state.employers.delete_employer(&username).await
}

/// GET /api/employer/getJobs?id=
pub async fn handle_get_jobs(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Query(params): Query<JobIdFilter>,
) -> Result<Json<Vec<JobDto>>, AppError> {
    let mut jobs = state.employers.employer_jobs(&username).await?;
    if let Some(id) = params.id {
        jobs.retain(|job| job.id == Some(id));
    }
    Ok(Json(jobs))
}

/// POST /api/employer/postJob
pub async fn handle_post_job(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(dto): Json<JobDto>,
) -> Result<String, AppError> {
    state.employers.post_job(&username, dto).await
}

/// DELETE /api/employer/deleteJob (body: the job id as a bare JSON number)
pub async fn handle_delete_job(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(job_id): Json<i64>,
) -> Result<String, AppError> {
    state.employers.delete_job(&username, job_id).await
}

/// POST /api/employer/acceptApplication (body: the freelancer id as a bare
/// JSON number)
pub async fn handle_accept_application(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(freelancer_id): Json<i64>,
) -> Result<String, AppError> {
    state
        .employers
        .accept_application(&username, freelancer_id)
        .await
}

/// GET /api/employer/getEmployees?name=
pub async fn handle_get_employees(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Query(params): Query<EmployeeNameFilter>,
) -> Result<Json<Vec<FreelancerDto>>, AppError> {
    let mut employees = state.employers.employees(&username).await?;
    if let Some(name) = &params.name {
        // A hidden name never matches the filter.
        employees.retain(|e| e.name.as_deref() == Some(name.as_str()));
    }
    Ok(Json(employees))
}
