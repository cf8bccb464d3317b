pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::employer::handlers as employer;
use crate::freelancer::handlers as freelancer;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/login", post(auth::handle_login))
        .route("/api/signup", post(auth::handle_signup))
        // Employer API
        .route("/api/employer/create", post(employer::handle_create))
        .route("/api/employer/update", put(employer::handle_update))
        .route("/api/employer/delete", delete(employer::handle_delete))
        .route("/api/employer/getJobs", get(employer::handle_get_jobs))
        .route("/api/employer/postJob", post(employer::handle_post_job))
        .route(
            "/api/employer/deleteJob",
            delete(employer::handle_delete_job),
        )
        .route(
            "/api/employer/acceptApplication",
            post(employer::handle_accept_application),
        )
        .route(
            "/api/employer/getEmployees",
            get(employer::handle_get_employees),
        )
        // Freelancer API
        .route("/api/freelancer/create", post(freelancer::handle_create))
        .route("/api/freelancer/update", put(freelancer::handle_update))
        .route(
            "/api/freelancer/applyJob",
            post(freelancer::handle_apply_job),
        )
        .route("/api/freelancer/view", get(freelancer::handle_view))
        .route(
            "/api/freelancer/visibility",
            put(freelancer::handle_update_visibility),
        )
        // Job board
        .route("/api/getJobs", get(jobs::handle_get_jobs))
        .route("/api/getApplicants", get(jobs::handle_get_applicants))
        .route("/api/searchJob", post(jobs::handle_search_jobs))
        .with_state(state)
}
