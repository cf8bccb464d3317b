use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;

/// Account role. Stored as text in `users.role`; parsed case-insensitively
/// at the signup boundary so the rest of the code never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employer,
    Freelancer,
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::Freelancer => "Freelancer",
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("employer") {
            Ok(Role::Employer)
        } else if s.eq_ignore_ascii_case("freelancer") {
            Ok(Role::Freelancer)
        } else {
            Err(ParseRoleError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Account row. Carries the password, so it is never serialized to the wire.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Signup request body. `role` arrives as free text and is parsed into [`Role`].
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
