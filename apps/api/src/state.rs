use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::auth::token::TokenService;
use crate::employer::EmployerService;
use crate::freelancer::FreelancerService;
use crate::jobs::JobService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Token verification for the auth extractor.
    pub tokens: TokenService,
    pub auth: Arc<AuthService>,
    pub employers: Arc<EmployerService>,
    pub freelancers: Arc<FreelancerService>,
    pub jobs: Arc<JobService>,
}
