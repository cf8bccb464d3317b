use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::jobs::JobService;
use crate::models::freelancer::{Freelancer, FreelancerDto, NewFreelancer, VisibilityFlags};
use crate::models::user::{Role, User};
use crate::skills::SkillMappingService;
use crate::store::applications::ApplicationStore;
use crate::store::freelancers::FreelancerStore;
use crate::store::users::UserStore;
use crate::visibility::VisibilityService;

/// Freelancer profiles: creation, updates, job applications, and the
/// visibility flags owners use to hide profile fields.
pub struct FreelancerService {
    users: Arc<dyn UserStore>,
    freelancers: Arc<dyn FreelancerStore>,
    applications: Arc<dyn ApplicationStore>,
    skills: Arc<SkillMappingService>,
    visibility: Arc<VisibilityService>,
    jobs: Arc<JobService>,
}

impl FreelancerService {
    pub fn new(
        users: Arc<dyn UserStore>,
        freelancers: Arc<dyn FreelancerStore>,
        applications: Arc<dyn ApplicationStore>,
        skills: Arc<SkillMappingService>,
        visibility: Arc<VisibilityService>,
        jobs: Arc<JobService>,
    ) -> Self {
        Self {
            users,
            freelancers,
            applications,
            skills,
            visibility,
            jobs,
        }
    }

    async fn require_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_name(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn require_profile(&self, user_id: i64) -> Result<Freelancer, AppError> {
        self.freelancers
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Freelancer not found"))
    }

    /// Creates the caller's freelancer profile. Salary and location come from
    /// the request; a second create for the same account is a no-op.
    pub async fn create_freelancer(
        &self,
        username: &str,
        dto: FreelancerDto,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Freelancer {
            return Err(AppError::unauthorized("Not authorized as a Freelancer"));
        }
        if self.freelancers.find_by_user_id(user.id).await?.is_some() {
            return Ok("Freelancer already exists".to_string());
        }
        let freelancer = self
            .freelancers
            .insert(NewFreelancer {
                user_id: user.id,
                salary: dto.salary,
                location: dto.location,
            })
            .await?;
        // New profiles start fully visible; the owner narrows this later.
        self.visibility
            .set_flags(freelancer.freelancer_id, VisibilityFlags::all_visible())
            .await?;
        info!(
            "Created freelancer profile {} for {username}",
            freelancer.freelancer_id
        );
        Ok("Freelancer created successfully".to_string())
    }

    /// Updates skills and salary on the caller's profile. Other fields are
    /// fixed at creation.
    pub async fn update_freelancer(
        &self,
        username: &str,
        dto: FreelancerDto,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let freelancer = self.require_profile(user.id).await?;
        if let Some(skills) = &dto.skills {
            if !skills.is_empty() {
                self.skills
                    .upsert_freelancer_skills(freelancer.freelancer_id, skills)
                    .await?;
            }
        }
        if let Some(salary) = dto.salary {
            self.freelancers
                .update_salary(freelancer.freelancer_id, salary)
                .await?;
        }
        Ok("Freelancer successfully updated".to_string())
    }

    /// Every profile on the board, projected through visibility flags.
    pub async fn all_freelancers(&self) -> Result<Vec<FreelancerDto>, AppError> {
        let freelancers = self.freelancers.find_all().await?;
        self.visibility.project(&freelancers).await
    }

    pub async fn freelancers_by_ids(&self, ids: &[i64]) -> Result<Vec<FreelancerDto>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let freelancers = self.freelancers.find_by_ids(ids).await?;
        self.visibility.project(&freelancers).await
    }

    pub async fn find_freelancer(
        &self,
        freelancer_id: i64,
    ) -> Result<Option<Freelancer>, AppError> {
        Ok(self.freelancers.get_by_id(freelancer_id).await?)
    }

    /// Records an application against the caller's profile. Re-applying to
    /// the same job, or applying to a job id that does not exist, reports
    /// back in the response message rather than failing the request.
    pub async fn apply_for_job(&self, username: &str, job_id: i64) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Freelancer {
            return Err(AppError::unauthorized("Unauthorized to apply on a job"));
        }
        if self.jobs.find_job(job_id).await?.is_none() {
            return Ok(format!("No job found with the job id: {job_id}"));
        }
        // Applications reference the freelancer profile, not the account.
        let freelancer = self.require_profile(user.id).await?;
        if self
            .applications
            .exists(job_id, freelancer.freelancer_id)
            .await?
        {
            return Ok("You have already applied for this job.".to_string());
        }
        self.applications
            .insert(job_id, freelancer.freelancer_id)
            .await?;
        info!(
            "Freelancer {} applied to job {job_id}",
            freelancer.freelancer_id
        );
        Ok("Successfully applied".to_string())
    }

    /// Overwrites the caller's visibility flags.
    pub async fn update_visibility(
        &self,
        username: &str,
        flags: VisibilityFlags,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let freelancer = self.require_profile(user.id).await?;
        self.visibility
            .set_flags(freelancer.freelancer_id, flags)
            .await?;
        Ok("Visibility updated".to_string())
    }
}
