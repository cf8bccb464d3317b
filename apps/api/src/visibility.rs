use std::sync::Arc;

use anyhow::anyhow;

use crate::errors::AppError;
use crate::models::freelancer::{Freelancer, FreelancerDto, FreelancerVisibility, VisibilityFlags};
use crate::skills::SkillMappingService;
use crate::store::users::UserStore;
use crate::store::visibility::VisibilityStore;

/// Projects freelancer profiles through their owners' visibility flags
/// before they are shown to anyone else.
pub struct VisibilityService {
    visibility: Arc<dyn VisibilityStore>,
    skills: Arc<SkillMappingService>,
    users: Arc<dyn UserStore>,
}

impl VisibilityService {
    pub fn new(
        visibility: Arc<dyn VisibilityStore>,
        skills: Arc<SkillMappingService>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            visibility,
            skills,
            users,
        }
    }

    /// Applies each freelancer's flags and returns the projected profiles.
    /// A profile without a visibility row, or without its owning user, is an
    /// integrity violation and fails the whole call.
    pub async fn project(
        &self,
        freelancers: &[Freelancer],
    ) -> Result<Vec<FreelancerDto>, AppError> {
        let mut out = Vec::with_capacity(freelancers.len());
        for freelancer in freelancers {
            out.push(self.project_one(freelancer).await?);
        }
        Ok(out)
    }

    async fn project_one(&self, freelancer: &Freelancer) -> Result<FreelancerDto, AppError> {
        let visibility = self
            .visibility
            .find_by_freelancer_id(freelancer.freelancer_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow!(
                    "freelancer {} has no visibility row",
                    freelancer.freelancer_id
                ))
            })?;
        let skills = self
            .skills
            .skills_for_freelancer(freelancer.freelancer_id)
            .await?;
        let user = self
            .users
            .get_by_id(freelancer.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow!(
                    "freelancer {} references missing user {}",
                    freelancer.freelancer_id,
                    freelancer.user_id
                ))
            })?;
        Ok(apply_visibility(user.name, skills, freelancer, &visibility))
    }

    /// Seeds or overwrites a freelancer's flags.
    pub async fn set_flags(
        &self,
        freelancer_id: i64,
        flags: VisibilityFlags,
    ) -> Result<(), AppError> {
        self.visibility.upsert(freelancer_id, flags).await?;
        Ok(())
    }
}

/// Field-by-field gate: a hidden field projects to `None` regardless of its
/// stored value.
pub fn apply_visibility(
    name: String,
    skills: Vec<String>,
    freelancer: &Freelancer,
    visibility: &FreelancerVisibility,
) -> FreelancerDto {
    FreelancerDto {
        name: visibility.name.then_some(name),
        skills: visibility.skills.then_some(skills),
        salary: if visibility.salary {
            freelancer.salary
        } else {
            None
        },
        location: if visibility.location {
            freelancer.location.clone()
        } else {
            None
        },
    }
}
