use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::job::{Job, NewJob};

/// Job postings over the `jobs` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, new: NewJob) -> Result<Job, sqlx::Error>;
    async fn get_by_id(&self, job_id: i64) -> Result<Option<Job>, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Job>, sqlx::Error>;
    async fn find_by_employer_id(&self, employer_id: i64) -> Result<Vec<Job>, sqlx::Error>;
    /// Removes a job and its skill mappings in one transaction. Application
    /// rows ride the FK cascade.
    async fn delete_with_skills(&self, job_id: i64) -> Result<(), sqlx::Error>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn insert(&self, new: NewJob) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (employer_id, title, description, location, salary, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.employer_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.location)
        .bind(new.salary)
        .bind(&new.tags)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_by_id(&self, job_id: i64) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY job_id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_employer_id(&self, employer_id: i64) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE employer_id = $1 ORDER BY job_id")
            .bind(employer_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn delete_with_skills(&self, job_id: i64) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM job_skill_mappings WHERE job_id = $1")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }
}
