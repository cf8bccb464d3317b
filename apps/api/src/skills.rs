use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::store::skills::SkillStore;

/// Additive skill mapping for freelancer profiles: new skills are appended,
/// existing rows are never rewritten or removed.
pub struct SkillMappingService {
    skills: Arc<dyn SkillStore>,
}

impl SkillMappingService {
    pub fn new(skills: Arc<dyn SkillStore>) -> Self {
        Self { skills }
    }

    /// Adds the given skills to a freelancer, skipping any already present.
    /// Matching is case-insensitive, so re-submitting a skill list is a no-op.
    pub async fn upsert_freelancer_skills(
        &self,
        freelancer_id: i64,
        skills: &[String],
    ) -> Result<(), AppError> {
        let existing = self.skills.skills_for_freelancer(freelancer_id).await?;
        let to_insert = missing_skills(&existing, skills);
        if to_insert.is_empty() {
            return Ok(());
        }
        self.skills
            .insert_freelancer_skills(freelancer_id, &to_insert)
            .await?;
        info!(
            "Added {} skill(s) to freelancer {freelancer_id}",
            to_insert.len()
        );
        Ok(())
    }

    pub async fn skills_for_freelancer(
        &self,
        freelancer_id: i64,
    ) -> Result<Vec<String>, AppError> {
        Ok(self.skills.skills_for_freelancer(freelancer_id).await?)
    }
}

/// Returns the subset of `input` not already present in `existing`,
/// case-insensitively. Repeats within `input` collapse to their first
/// spelling, so one call never produces duplicate rows either.
pub fn missing_skills(existing: &[String], input: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = existing.iter().map(|s| s.to_lowercase()).collect();
    let mut out = Vec::new();
    for skill in input {
        if seen.insert(skill.to_lowercase()) {
            out.push(skill.clone());
        }
    }
    out
}
