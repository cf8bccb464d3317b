use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employer profile row. 1:1 with an Employer-role account.
#[derive(Debug, Clone, FromRow)]
pub struct Employer {
    pub employer_id: i64,
    pub user_id: i64,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

/// Wire shape for employer create/update requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerDto {
    pub company_name: String,
}
