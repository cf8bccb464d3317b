use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Freelancer profile row. 1:1 with a Freelancer-role account.
/// `salary` and `location` are optional profile fields, not yet-unset columns.
#[derive(Debug, Clone, FromRow)]
pub struct Freelancer {
    pub freelancer_id: i64,
    pub user_id: i64,
    pub salary: Option<i64>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new freelancer profile.
#[derive(Debug, Clone)]
pub struct NewFreelancer {
    pub user_id: i64,
    pub salary: Option<i64>,
    pub location: Option<String>,
}

/// Per-freelancer visibility row: each flag gates the matching profile field
/// when the profile is shown to other users.
#[derive(Debug, Clone, FromRow)]
pub struct FreelancerVisibility {
    pub id: i64,
    pub freelancer_id: i64,
    pub name: bool,
    pub salary: bool,
    pub location: bool,
    pub skills: bool,
}

/// The four visibility flags, as written by the visibility endpoint and
/// seeded (all true) when a profile is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VisibilityFlags {
    pub name: bool,
    pub salary: bool,
    pub location: bool,
    pub skills: bool,
}

impl VisibilityFlags {
    pub fn all_visible() -> Self {
        Self {
            name: true,
            salary: true,
            location: true,
            skills: true,
        }
    }
}

/// Projected freelancer profile. Doubles as the create/update request body,
/// which is why every field is optional; on the way out, `None` means the
/// owner has hidden that field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreelancerDto {
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub salary: Option<i64>,
    pub location: Option<String>,
}
