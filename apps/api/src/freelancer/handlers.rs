use axum::extract::State;
use axum::Json;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::freelancer::{FreelancerDto, VisibilityFlags};
use crate::state::AppState;

/// POST /api/freelancer/create
pub async fn handle_create(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(dto): Json<FreelancerDto>,
) -> Result<String, AppError> {
    state.freelancers.create_freelancer(&username, dto).await
}

/// PUT /api/freelancer/update
pub async fn handle_update(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(dto): Json<FreelancerDto>,
) -> Result<String, AppError> {
    state.freelancers.update_freelancer(&username, dto).await
}

/// POST /api/freelancer/applyJob (body: the job id as a bare JSON number)
pub async fn handle_apply_job(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(job_id): Json<i64>,
) -> Result<String, AppError> {
    state.freelancers.apply_for_job(&username, job_id).await
}

/// GET /api/freelancer/view
pub async fn handle_view(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<FreelancerDto>>, AppError> {
    let freelancers = state.freelancers.all_freelancers().await?;
    Ok(Json(freelancers))
}

/// PUT /api/freelancer/visibility
pub async fn handle_update_visibility(
    State(state): State<AppState>,
    AuthUser { username }: AuthUser,
    Json(flags): Json<VisibilityFlags>,
) -> Result<String, AppError> {
    state.freelancers.update_visibility(&username, flags).await
}
