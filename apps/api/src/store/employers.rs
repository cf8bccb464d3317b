use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::employer::Employer;

/// Employer profiles over the `employers` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployerStore: Send + Sync {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Employer>, sqlx::Error>;
    async fn get_by_id(&self, employer_id: i64) -> Result<Option<Employer>, sqlx::Error>;
    async fn insert(&self, user_id: i64, company_name: &str) -> Result<Employer, sqlx::Error>;
    async fn update_company_name(
        &self,
        employer_id: i64,
        company_name: &str,
    ) -> Result<(), sqlx::Error>;
    /// Removes the employer profile and its owning account in one
    /// transaction. Jobs and mappings ride the FK cascades.
    async fn delete_with_user(&self, employer_id: i64, user_id: i64) -> Result<(), sqlx::Error>;
}

pub struct PgEmployerStore {
    pool: PgPool,
}

impl PgEmployerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployerStore for PgEmployerStore {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_by_id(&self, employer_id: i64) -> Result<Option<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE employer_id = $1")
            .bind(employer_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, user_id: i64, company_name: &str) -> Result<Employer, sqlx::Error> {
        sqlx::query_as::<_, Employer>(
            r#"
            INSERT INTO employers (user_id, company_name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(company_name)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_company_name(
        &self,
        employer_id: i64,
        company_name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE employers SET company_name = $1 WHERE employer_id = $2")
            .bind(company_name)
            .bind(employer_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_with_user(&self, employer_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM employers WHERE employer_id = $1")
            .bind(employer_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }
}
