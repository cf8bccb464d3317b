use async_trait::async_trait;
use sqlx::PgPool;

/// Job applications (`freelancer_job_mappings`). The table carries no unique
/// constraint on the pair; callers pre-check with `exists`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn exists(&self, job_id: i64, freelancer_id: i64) -> Result<bool, sqlx::Error>;
    async fn insert(&self, job_id: i64, freelancer_id: i64) -> Result<(), sqlx::Error>;
    async fn freelancer_ids_for_job(&self, job_id: i64) -> Result<Vec<i64>, sqlx::Error>;
}

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn exists(&self, job_id: i64, freelancer_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM freelancer_job_mappings WHERE job_id = $1 AND freelancer_id = $2)",
        )
        .bind(job_id)
        .bind(freelancer_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn insert(&self, job_id: i64, freelancer_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO freelancer_job_mappings (job_id, freelancer_id) VALUES ($1, $2)")
            .bind(job_id)
            .bind(freelancer_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn freelancer_ids_for_job(&self, job_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT freelancer_id FROM freelancer_job_mappings WHERE job_id = $1 ORDER BY id",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
    }
}
