use async_trait::async_trait;
use sqlx::PgPool;

/// Accepted-employee roster (`employer_employee_mappings`). Like
/// applications, duplicate pairs are prevented by the `exists` pre-check,
/// not a DB constraint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn exists(&self, employer_id: i64, employee_id: i64) -> Result<bool, sqlx::Error>;
    async fn insert(&self, employer_id: i64, employee_id: i64) -> Result<(), sqlx::Error>;
    async fn employee_ids_for_employer(&self, employer_id: i64) -> Result<Vec<i64>, sqlx::Error>;
}

pub struct PgRosterStore {
    pool: PgPool,
}

impl PgRosterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterStore for PgRosterStore {
    async fn exists(&self, employer_id: i64, employee_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM employer_employee_mappings WHERE employer_id = $1 AND employee_id = $2)",
        )
        .bind(employer_id)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn insert(&self, employer_id: i64, employee_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO employer_employee_mappings (employer_id, employee_id) VALUES ($1, $2)",
        )
        .bind(employer_id)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn employee_ids_for_employer(&self, employer_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT employee_id FROM employer_employee_mappings WHERE employer_id = $1 ORDER BY id",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
    }
}
