use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::freelancer::{Freelancer, NewFreelancer};

/// Freelancer profiles over the `freelancers` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FreelancerStore: Send + Sync {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Freelancer>, sqlx::Error>;
    async fn get_by_id(&self, freelancer_id: i64) -> Result<Option<Freelancer>, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Freelancer>, sqlx::Error>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Freelancer>, sqlx::Error>;
    async fn insert(&self, new: NewFreelancer) -> Result<Freelancer, sqlx::Error>;
    async fn update_salary(&self, freelancer_id: i64, salary: i64) -> Result<(), sqlx::Error>;
}

pub struct PgFreelancerStore {
    pool: PgPool,
}

impl PgFreelancerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FreelancerStore for PgFreelancerStore {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Freelancer>, sqlx::Error> {
        sqlx::query_as::<_, Freelancer>("SELECT * FROM freelancers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_by_id(&self, freelancer_id: i64) -> Result<Option<Freelancer>, sqlx::Error> {
        sqlx::query_as::<_, Freelancer>("SELECT * FROM freelancers WHERE freelancer_id = $1")
            .bind(freelancer_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> Result<Vec<Freelancer>, sqlx::Error> {
        sqlx::query_as::<_, Freelancer>("SELECT * FROM freelancers ORDER BY freelancer_id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Freelancer>, sqlx::Error> {
        sqlx::query_as::<_, Freelancer>(
            "SELECT * FROM freelancers WHERE freelancer_id = ANY($1) ORDER BY freelancer_id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }

    async fn insert(&self, new: NewFreelancer) -> Result<Freelancer, sqlx::Error> {
        sqlx::query_as::<_, Freelancer>(
            r#"
            INSERT INTO freelancers (user_id, salary, location)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new.user_id)
        .bind(new.salary)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_salary(&self, freelancer_id: i64, salary: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE freelancers SET salary = $1 WHERE freelancer_id = $2")
            .bind(salary)
            .bind(freelancer_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
