use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::freelancer::FreelancerService;
use crate::jobs::JobService;
use crate::models::employer::{Employer, EmployerDto};
use crate::models::freelancer::FreelancerDto;
use crate::models::job::{JobDto, NewJob};
use crate::models::user::{Role, User};
use crate::store::employers::EmployerStore;
use crate::store::roster::RosterStore;
use crate::store::users::UserStore;

/// Employer profiles and everything an employer does with them: posting and
/// deleting jobs, accepting applicants, and listing the accepted roster.
pub struct EmployerService {
    users: Arc<dyn UserStore>,
    employers: Arc<dyn EmployerStore>,
    roster: Arc<dyn RosterStore>,
    jobs: Arc<JobService>,
    freelancers: Arc<FreelancerService>,
}

impl EmployerService {
    pub fn new(
        users: Arc<dyn UserStore>,
        employers: Arc<dyn EmployerStore>,
        roster: Arc<dyn RosterStore>,
        jobs: Arc<JobService>,
        freelancers: Arc<FreelancerService>,
    ) -> Self {
        Self {
            users,
            employers,
            roster,
            jobs,
            freelancers,
        }
    }

    async fn require_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_name(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn require_employer(&self, user_id: i64) -> Result<Employer, AppError> {
        self.employers
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employer not found"))
    }

    /// Creates the caller's employer profile. A second create for the same
    /// account is a no-op.
    pub async fn create_employer(
        &self,
        username: &str,
        dto: EmployerDto,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Employer {
            return Err(AppError::unauthorized("Not authorized as an Employer"));
        }
        if self.employers.find_by_user_id(user.id).await?.is_some() {
            return Ok("Employer already exists".to_string());
        }
        let employer = self.employers.insert(user.id, &dto.company_name).await?;
        info!("Created employer profile {} for {username}", employer.employer_id);
        Ok("Employer created successfully".to_string())
    }

    pub async fn update_employer(
        &self,
        username: &str,
        dto: EmployerDto,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let employer = self.require_employer(user.id).await?;
        self.employers
            .update_company_name(employer.employer_id, &dto.company_name)
            .await?;
        Ok("Successfully Updated".to_string())
    }

    /// Removes the caller's employer profile together with its account.
    /// Jobs, skill mappings, and roster rows go with it.
    pub async fn delete_employer(&self, username: &str) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let employer = self.require_employer(user.id).await?;
        self.employers
            .delete_with_user(employer.employer_id, user.id)
            .await?;
        info!("Deleted employer profile {} and account {}", employer.employer_id, user.id);
        Ok("Successfully Deleted".to_string())
    }

    pub async fn employer_jobs(&self, username: &str) -> Result<Vec<JobDto>, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Employer {
            return Err(AppError::unauthorized("Unauthorized as an employer"));
        }
        let employer = self.require_employer(user.id).await?;
        self.jobs.jobs_by_employer(employer.employer_id).await
    }

    pub async fn post_job(&self, username: &str, dto: JobDto) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        if user.role != Role::Employer {
            return Err(AppError::unauthorized("Unauthorized as an employer"));
        }
        let employer = self.require_employer(user.id).await?;
        let JobDto {
            title,
            description,
            location,
            salary,
            tags,
            skills,
            ..
        } = dto;
        let new = NewJob {
            employer_id: employer.employer_id,
            title,
            description,
            location,
            salary,
            tags,
        };
        self.jobs.create_job(new, &skills).await?;
        Ok("Successfully Posted job".to_string())
    }

    pub async fn delete_job(&self, username: &str, job_id: i64) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let employer = self.require_employer(user.id).await?;
        self.jobs.delete_job(&employer, job_id).await
    }

    /// Adds an applicant to the caller's roster. The id is the freelancer
    /// profile id reported by the applicants listing.
    pub async fn accept_application(
        &self,
        username: &str,
        freelancer_id: i64,
    ) -> Result<String, AppError> {
        let user = self.require_user(username).await?;
        let employer = self.require_employer(user.id).await?;
        if self
            .freelancers
            .find_freelancer(freelancer_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Freelancer not found"));
        }
        if self
            .roster
            .exists(employer.employer_id, freelancer_id)
            .await?
        {
            return Err(AppError::already_exists(
                "Freelancer is already added as an Employee",
            ));
        }
        self.roster
            .insert(employer.employer_id, freelancer_id)
            .await?;
        info!(
            "Employer {} accepted freelancer {freelancer_id}",
            employer.employer_id
        );
        Ok("Freelancer added as an Employee".to_string())
    }

    pub async fn employees(&self, username: &str) -> Result<Vec<FreelancerDto>, AppError> {
        let user = self.require_user(username).await?;
        let employer = self.require_employer(user.id).await?;
        let ids = self
            .roster
            .employee_ids_for_employer(employer.employer_id)
            .await?;
        self.freelancers.freelancers_by_ids(&ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::freelancer::{Freelancer, FreelancerVisibility};
    use crate::models::job::Job;
    use crate::skills::SkillMappingService;
    use crate::store::applications::{ApplicationStore, MockApplicationStore};
    use crate::store::employers::MockEmployerStore;
    use crate::store::freelancers::{FreelancerStore, MockFreelancerStore};
    use crate::store::jobs::MockJobStore;
    use crate::store::roster::MockRosterStore;
    use crate::store::skills::{MockSkillStore, SkillStore};
    use crate::store::users::MockUserStore;
    use crate::store::visibility::MockVisibilityStore;
    use crate::visibility::VisibilityService;

    #[derive(Default)]
    struct Mocks {
        users: MockUserStore,
        employers: MockEmployerStore,
        roster: MockRosterStore,
        jobs: MockJobStore,
        skills: MockSkillStore,
        freelancers: MockFreelancerStore,
        applications: MockApplicationStore,
        visibility: MockVisibilityStore,
    }

    fn build(m: Mocks) -> EmployerService {
        let users: Arc<dyn UserStore> = Arc::new(m.users);
        let employers: Arc<dyn EmployerStore> = Arc::new(m.employers);
        let freelancer_store: Arc<dyn FreelancerStore> = Arc::new(m.freelancers);
        let applications: Arc<dyn ApplicationStore> = Arc::new(m.applications);
        let skills: Arc<dyn SkillStore> = Arc::new(m.skills);
        let skill_service = Arc::new(SkillMappingService::new(skills.clone()));
        let visibility = Arc::new(VisibilityService::new(
            Arc::new(m.visibility),
            skill_service.clone(),
            users.clone(),
        ));
        let jobs = Arc::new(JobService::new(
            users.clone(),
            Arc::new(m.jobs),
            skills,
            employers.clone(),
            applications.clone(),
            freelancer_store.clone(),
            visibility.clone(),
        ));
        let freelancers = Arc::new(FreelancerService::new(
            users.clone(),
            freelancer_store,
            applications,
            skill_service,
            visibility,
            jobs.clone(),
        ));
        EmployerService::new(users, employers, Arc::new(m.roster), jobs, freelancers)
    }

    fn user(id: i64, name: &str, role: Role) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password: "secret".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    fn employer(employer_id: i64, user_id: i64) -> Employer {
        Employer {
            employer_id,
            user_id,
            company_name: "Acme".to_string(),
            created_at: Utc::now(),
        }
    }

    fn freelancer(freelancer_id: i64, user_id: i64) -> Freelancer {
        Freelancer {
            freelancer_id,
            user_id,
            salary: Some(80_000),
            location: Some("Berlin".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_employers() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "fred", Role::Freelancer))));

        let err = build(m)
            .create_employer("fred", EmployerDto { company_name: "Acme".to_string() })
            .await
            .unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Not authorized as an Employer"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_is_idempotent_per_account() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.employers.expect_insert().times(0);

        let msg = build(m)
            .create_employer("eva", EmployerDto { company_name: "Acme".to_string() })
            .await
            .unwrap();
        assert_eq!(msg, "Employer already exists");
    }

    #[tokio::test]
    async fn test_create_inserts_profile() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(None));
        m.employers
            .expect_insert()
            .withf(|user_id, company_name| *user_id == 1 && company_name == "Acme")
            .times(1)
            .returning(|user_id, _| Ok(employer(2, user_id)));

        let msg = build(m)
            .create_employer("eva", EmployerDto { company_name: "Acme".to_string() })
            .await
            .unwrap();
        assert_eq!(msg, "Employer created successfully");
    }

    #[tokio::test]
    async fn test_update_without_profile_is_not_found() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(None));

        let err = build(m)
            .update_employer("eva", EmployerDto { company_name: "Acme".to_string() })
            .await
            .unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Employer not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_profile_and_account_together() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.employers
            .expect_delete_with_user()
            .withf(|employer_id, user_id| *employer_id == 2 && *user_id == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        let msg = build(m).delete_employer("eva").await.unwrap();
        assert_eq!(msg, "Successfully Deleted");
    }

    #[tokio::test]
    async fn test_post_job_requires_employer_role() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "fred", Role::Freelancer))));
        m.jobs.expect_insert().times(0);

        let dto = JobDto {
            id: None,
            title: "Backend Engineer".to_string(),
            description: "APIs and storage".to_string(),
            location: "Berlin".to_string(),
            salary: Some(90_000),
            tags: None,
            skills: Vec::new(),
        };
        let err = build(m).post_job("fred", dto).await.unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Unauthorized as an employer"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_post_job_saves_job_and_skills() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.jobs
            .expect_insert()
            .withf(|new| new.employer_id == 2 && new.title == "Backend Engineer")
            .returning(|new| {
                Ok(Job {
                    job_id: 7,
                    employer_id: new.employer_id,
                    title: new.title,
                    description: new.description,
                    location: new.location,
                    salary: new.salary,
                    tags: new.tags,
                    created_at: Utc::now(),
                })
            });
        m.skills
            .expect_insert_job_skills()
            .withf(|job_id, skills| *job_id == 7 && skills == ["Go".to_string()])
            .times(1)
            .returning(|_, _| Ok(()));

        let dto = JobDto {
            id: None,
            title: "Backend Engineer".to_string(),
            description: "APIs and storage".to_string(),
            location: "Berlin".to_string(),
            salary: Some(90_000),
            tags: None,
            skills: vec!["Go".to_string()],
        };
        let msg = build(m).post_job("eva", dto).await.unwrap();
        assert_eq!(msg, "Successfully Posted job");
    }

    #[tokio::test]
    async fn test_employer_jobs_requires_employer_role() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "fred", Role::Freelancer))));

        let err = build(m).employer_jobs("fred").await.unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Unauthorized as an employer"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accept_application_twice_is_a_conflict() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.freelancers
            .expect_get_by_id()
            .returning(|_| Ok(Some(freelancer(3, 9))));
        m.roster
            .expect_exists()
            .withf(|employer_id, employee_id| *employer_id == 2 && *employee_id == 3)
            .returning(|_, _| Ok(true));
        m.roster.expect_insert().times(0);

        let err = build(m).accept_application("eva", 3).await.unwrap_err();
        match err {
            AppError::AlreadyExists(msg) => {
                assert_eq!(msg, "Freelancer is already added as an Employee")
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accept_application_rejects_unknown_freelancer() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.freelancers
            .expect_get_by_id()
            .withf(|freelancer_id| *freelancer_id == 42)
            .returning(|_| Ok(None));
        m.roster.expect_insert().times(0);

        let err = build(m).accept_application("eva", 42).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Freelancer not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accept_application_records_employee() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.freelancers
            .expect_get_by_id()
            .returning(|_| Ok(Some(freelancer(3, 9))));
        m.roster.expect_exists().returning(|_, _| Ok(false));
        m.roster
            .expect_insert()
            .withf(|employer_id, employee_id| *employer_id == 2 && *employee_id == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let msg = build(m).accept_application("eva", 3).await.unwrap();
        assert_eq!(msg, "Freelancer added as an Employee");
    }

    #[tokio::test]
    async fn test_employees_projects_roster_through_visibility() {
        let mut m = Mocks::default();
        m.users
            .expect_find_by_name()
            .returning(|_| Ok(Some(user(1, "eva", Role::Employer))));
        m.users
            .expect_get_by_id()
            .withf(|id| *id == 5)
            .returning(|_| Ok(Some(user(5, "fred", Role::Freelancer))));
        m.employers
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(employer(2, 1))));
        m.roster
            .expect_employee_ids_for_employer()
            .withf(|id| *id == 2)
            .returning(|_| Ok(vec![3]));
        m.freelancers
            .expect_find_by_ids()
            .withf(|ids| ids == [3])
            .returning(|_| Ok(vec![freelancer(3, 5)]));
        m.visibility
            .expect_find_by_freelancer_id()
            .returning(|_| {
                Ok(Some(FreelancerVisibility {
                    id: 1,
                    freelancer_id: 3,
                    name: true,
                    salary: false,
                    location: true,
                    skills: true,
                }))
            });
        m.skills
            .expect_skills_for_freelancer()
            .returning(|_| Ok(vec!["Go".to_string()]));

        let out = build(m).employees("eva").await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name.as_deref(), Some("fred"));
        assert!(out[0].salary.is_none());
        assert_eq!(out[0].location.as_deref(), Some("Berlin"));
    }
}
