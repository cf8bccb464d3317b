mod auth;
mod config;
mod db;
mod employer;
mod errors;
mod freelancer;
mod jobs;
mod models;
mod routes;
mod skills;
mod state;
mod store;
mod visibility;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::service::AuthService;
use crate::auth::token::TokenService;
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::employer::EmployerService;
use crate::freelancer::FreelancerService;
use crate::jobs::JobService;
use crate::routes::build_router;
use crate::skills::SkillMappingService;
use crate::state::AppState;
use crate::store::applications::{ApplicationStore, PgApplicationStore};
use crate::store::employers::{EmployerStore, PgEmployerStore};
use crate::store::freelancers::{FreelancerStore, PgFreelancerStore};
use crate::store::jobs::{JobStore, PgJobStore};
use crate::store::roster::{PgRosterStore, RosterStore};
use crate::store::skills::{PgSkillStore, SkillStore};
use crate::store::users::{PgUserStore, UserStore};
use crate::store::visibility::{PgVisibilityStore, VisibilityStore};
use crate::visibility::VisibilityService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and bring the schema up to date
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    // Stores
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db.clone()));
    let employer_store: Arc<dyn EmployerStore> = Arc::new(PgEmployerStore::new(db.clone()));
    let freelancer_store: Arc<dyn FreelancerStore> = Arc::new(PgFreelancerStore::new(db.clone()));
    let job_store: Arc<dyn JobStore> = Arc::new(PgJobStore::new(db.clone()));
    let skill_store: Arc<dyn SkillStore> = Arc::new(PgSkillStore::new(db.clone()));
    let application_store: Arc<dyn ApplicationStore> =
        Arc::new(PgApplicationStore::new(db.clone()));
    let roster_store: Arc<dyn RosterStore> = Arc::new(PgRosterStore::new(db.clone()));
    let visibility_store: Arc<dyn VisibilityStore> = Arc::new(PgVisibilityStore::new(db));

    // Services, wired in dependency order
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_hours);
    let skill_service = Arc::new(SkillMappingService::new(skill_store.clone()));
    let visibility_service = Arc::new(VisibilityService::new(
        visibility_store,
        skill_service.clone(),
        users.clone(),
    ));
    let job_service = Arc::new(JobService::new(
        users.clone(),
        job_store,
        skill_store,
        employer_store.clone(),
        application_store.clone(),
        freelancer_store.clone(),
        visibility_service.clone(),
    ));
    let freelancer_service = Arc::new(FreelancerService::new(
        users.clone(),
        freelancer_store,
        application_store,
        skill_service,
        visibility_service,
        job_service.clone(),
    ));
    let employer_service = Arc::new(EmployerService::new(
        users.clone(),
        employer_store,
        roster_store,
        job_service.clone(),
        freelancer_service.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(users, tokens.clone()));

    // Build app state
    let state = AppState {
        tokens,
        auth: auth_service,
        employers: employer_service,
        freelancers: freelancer_service,
        jobs: job_service,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
