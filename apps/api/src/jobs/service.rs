use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::jobs::search::filter_jobs;
use crate::models::employer::Employer;
use crate::models::freelancer::FreelancerDto;
use crate::models::job::{Job, JobDto, NewJob, SearchDto};
use crate::models::user::{Role, User};
use crate::store::applications::ApplicationStore;
use crate::store::employers::EmployerStore;
use crate::store::freelancers::FreelancerStore;
use crate::store::jobs::JobStore;
use crate::store::skills::SkillStore;
use crate::store::users::UserStore;
use crate::visibility::VisibilityService;

/// Job postings: creation, listing, search, applicant listing, deletion.
/// Employer-side entry points live in `EmployerService`, which resolves the
/// employer profile before calling in here.
pub struct JobService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    skills: Arc<dyn SkillStore>,
    employers: Arc<dyn EmployerStore>,
    applications: Arc<dyn ApplicationStore>,
    freelancers: Arc<dyn FreelancerStore>,
    visibility: Arc<VisibilityService>,
}

impl JobService {
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        skills: Arc<dyn SkillStore>,
        employers: Arc<dyn EmployerStore>,
        applications: Arc<dyn ApplicationStore>,
        freelancers: Arc<dyn FreelancerStore>,
        visibility: Arc<VisibilityService>,
    ) -> Self {
        Self {
            users,
            jobs,
            skills,
            employers,
            applications,
            freelancers,
            visibility,
        }
    }

    async fn require_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_name(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn create_job(&self, new: NewJob, skills: &[String]) -> Result<(), AppError> {
        let job = self.jobs.insert(new).await?;
        if !skills.is_empty() {
            self.skills.insert_job_skills(job.job_id, skills).await?;
        }
        info!("Employer {} posted job {}", job.employer_id, job.job_id);
        Ok(())
    }

    pub async fn find_job(&self, job_id: i64) -> Result<Option<Job>, AppError> {
        Ok(self.jobs.get_by_id(job_id).await?)
    }

    pub async fn jobs_by_employer(&self, employer_id: i64) -> Result<Vec<JobDto>, AppError> {
        let jobs = self.jobs.find_by_employer_id(employer_id).await?;
        self.to_dtos(jobs).await
    }

    /// Full listing for freelancers browsing the board.
    pub async fn all_jobs(&self, username: &str) -> Result<Vec<JobDto>, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Freelancer {
            return Err(AppError::unauthorized("Unauthorized user"));
        }
        let jobs = self.jobs.find_all().await?;
        self.to_dtos(jobs).await
    }

    pub async fn search_jobs(
        &self,
        username: &str,
        criteria: &SearchDto,
    ) -> Result<Vec<JobDto>, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Freelancer {
            return Err(AppError::unauthorized("Unauthorized to search for jobs"));
        }
        let jobs = self.jobs.find_all().await?;
        let skill_job_ids = match &criteria.skills {
            Some(skills) if !skills.is_empty() => {
                self.skills.job_ids_with_any_skill(skills).await?
            }
            _ => Vec::new(),
        };
        let jobs = filter_jobs(jobs, criteria, &skill_job_ids);
        self.to_dtos(jobs).await
    }

    /// Everyone who applied to the job, projected through their visibility
    /// flags. Only the employer who posted the job may call this.
    pub async fn applicants(
        &self,
        username: &str,
        job_id: i64,
    ) -> Result<Vec<FreelancerDto>, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Employer {
            return Err(AppError::unauthorized("Unauthorized as an employer"));
        }
        let job = self
            .jobs
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No job found with the job id: {job_id}")))?;
        let employer = self
            .employers
            .get_by_id(job.employer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employer not found"))?;
        if employer.user_id != user.id {
            return Err(AppError::unauthorized("Unauthorized employer"));
        }
        let ids = self.applications.freelancer_ids_for_job(job_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let freelancers = self.freelancers.find_by_ids(&ids).await?;
        self.visibility.project(&freelancers).await
    }

    /// Removes a job the given employer owns, along with its skill mappings.
    pub async fn delete_job(&self, employer: &Employer, job_id: i64) -> Result<String, AppError> {
        let job = self
            .jobs
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No job found with the job id: {job_id}")))?;
        if job.employer_id != employer.employer_id {
            return Err(AppError::unauthorized("Not authorized"));
        }
        self.jobs.delete_with_skills(job_id).await?;
        info!("Employer {} deleted job {job_id}", employer.employer_id);
        Ok("Successfully deleted".to_string())
    }

    async fn to_dtos(&self, jobs: Vec<Job>) -> Result<Vec<JobDto>, AppError> {
        let mut out = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let skills = self.skills.skills_for_job(job.job_id).await?;
            out.push(JobDto::from_job(job, skills));
        }
        Ok(out)
    }
}
