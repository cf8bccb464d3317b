use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job posting row.
#[derive(Debug, Clone, FromRow)]
pub struct Job {
    pub job_id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub tags: Option<String>,
}

/// Wire shape for job postings, inbound (postJob) and outbound (listings).
/// `id` is ignored on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDto {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<i64>,
    pub tags: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl JobDto {
    pub fn from_job(job: &Job, skills: Vec<String>) -> Self {
        Self {
            id: Some(job.job_id),
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            salary: job.salary,
            tags: job.tags.clone(),
            skills,
        }
    }
}

/// Search criteria; every field is optional and absent fields skip their filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDto {
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}
