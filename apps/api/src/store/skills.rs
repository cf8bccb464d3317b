use async_trait::async_trait;
use sqlx::PgPool;

/// Skill mapping rows for both jobs and freelancers. Inserts are append-only;
/// job-side rows are only ever removed together with their job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn skills_for_job(&self, job_id: i64) -> Result<Vec<String>, sqlx::Error>;
    async fn insert_job_skills(&self, job_id: i64, skills: &[String]) -> Result<(), sqlx::Error>;
    /// Ids of every job carrying at least one of the given skills
    /// (exact-match, the reverse lookup behind skill search).
    async fn job_ids_with_any_skill(&self, skills: &[String]) -> Result<Vec<i64>, sqlx::Error>;
    async fn skills_for_freelancer(&self, freelancer_id: i64) -> Result<Vec<String>, sqlx::Error>;
    async fn insert_freelancer_skills(
        &self,
        freelancer_id: i64,
        skills: &[String],
    ) -> Result<(), sqlx::Error>;
}

pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn skills_for_job(&self, job_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT skill FROM job_skill_mappings WHERE job_id = $1 ORDER BY id")
            .bind(job_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn insert_job_skills(&self, job_id: i64, skills: &[String]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for skill in skills {
            sqlx::query("INSERT INTO job_skill_mappings (job_id, skill) VALUES ($1, $2)")
                .bind(job_id)
                .bind(skill)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }

    async fn job_ids_with_any_skill(&self, skills: &[String]) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT job_id FROM job_skill_mappings WHERE skill = ANY($1)")
            .bind(skills)
            .fetch_all(&self.pool)
            .await
    }

    async fn skills_for_freelancer(&self, freelancer_id: i64) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT skill FROM freelancer_skill_mappings WHERE freelancer_id = $1 ORDER BY id",
        )
        .bind(freelancer_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_freelancer_skills(
        &self,
        freelancer_id: i64,
        skills: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for skill in skills {
            sqlx::query("INSERT INTO freelancer_skill_mappings (freelancer_id, skill) VALUES ($1, $2)")
                .bind(freelancer_id)
                .bind(skill)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }
}
