use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::freelancer::{FreelancerVisibility, VisibilityFlags};

/// Per-freelancer visibility flags over `freelancer_visibility`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisibilityStore: Send + Sync {
    async fn find_by_freelancer_id(
        &self,
        freelancer_id: i64,
    ) -> Result<Option<FreelancerVisibility>, sqlx::Error>;
    async fn upsert(&self, freelancer_id: i64, flags: VisibilityFlags) -> Result<(), sqlx::Error>;
}

pub struct PgVisibilityStore {
    pool: PgPool,
}

impl PgVisibilityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisibilityStore for PgVisibilityStore {
    async fn find_by_freelancer_id(
        &self,
        freelancer_id: i64,
    ) -> Result<Option<FreelancerVisibility>, sqlx::Error> {
        sqlx::query_as::<_, FreelancerVisibility>(
            "SELECT * FROM freelancer_visibility WHERE freelancer_id = $1",
        )
        .bind(freelancer_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn upsert(&self, freelancer_id: i64, flags: VisibilityFlags) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO freelancer_visibility (freelancer_id, name, salary, location, skills)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (freelancer_id) DO UPDATE
            SET name = EXCLUDED.name,
                salary = EXCLUDED.salary,
                location = EXCLUDED.location,
                skills = EXCLUDED.skills
            "#,
        )
        .bind(freelancer_id)
        .bind(flags.name)
        .bind(flags.salary)
        .bind(flags.location)
        .bind(flags.skills)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
