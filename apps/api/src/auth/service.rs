use std::sync::Arc;

use tracing::info;

use crate::auth::token::TokenService;
use crate::errors::AppError;
use crate::models::user::{NewUser, Role, UserDto};
use crate::store::users::UserStore;

/// Login and signup flows.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Checks an email/password pair and returns a bearer token bound to the
    /// account's username.
    ///
    /// Passwords are stored and compared in plain text. Swap in a password
    /// hash before this fronts real accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if user.password != password {
            return Err(AppError::InvalidCredentials);
        }
        self.tokens.issue(&user.name)
    }

    /// Registers a new account and returns a token for it. Only the email is
    /// checked for prior use; the role must parse (case-insensitively) into
    /// one of the two known roles.
    pub async fn register(&self, dto: UserDto) -> Result<String, AppError> {
        if self.users.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::already_exists("Email is already in use"));
        }
        let role: Role = dto
            .role
            .parse()
            .map_err(|_| AppError::validation(format!("Unknown role: {}", dto.role)))?;
        let user = self
            .users
            .insert(NewUser {
                name: dto.name,
                email: dto.email,
                password: dto.password,
                role,
            })
            .await?;
        info!("Registered user {} as {}", user.name, role.as_str());
        self.tokens.issue(&user.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;
    use crate::store::users::MockUserStore;
    use chrono::Utc;

    fn user(name: &str, email: &str, password: &str, role: Role) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    fn dto(name: &str, email: &str, role: &str) -> UserDto {
        UserDto {
            name: name.to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            role: role.to_string(),
        }
    }

    fn service(users: MockUserStore) -> AuthService {
        AuthService::new(Arc::new(users), TokenService::new("test-secret", 1))
    }

    #[tokio::test]
    async fn test_authenticate_returns_token_bound_to_username() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user("alice", "alice@mail.io", "pw", Role::Freelancer))));

        let token = service(users).authenticate("alice@mail.io", "pw").await.unwrap();
        let verified = TokenService::new("test-secret", 1).verify(&token).unwrap();
        assert_eq!(verified, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_is_not_found() {
        let mut users = MockUserStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let err = service(users).authenticate("ghost@mail.io", "pw").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "User not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_is_rejected() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user("alice", "alice@mail.io", "pw", Role::Freelancer))));

        let err = service(users).authenticate("alice@mail.io", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_rejects_taken_email() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user("alice", "alice@mail.io", "pw", Role::Freelancer))));
        users.expect_insert().times(0);

        let err = service(users)
            .register(dto("bob", "alice@mail.io", "Employer"))
            .await
            .unwrap_err();
        match err {
            AppError::AlreadyExists(msg) => assert_eq!(msg, "Email is already in use"),
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_unknown_role() {
        let mut users = MockUserStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_insert().times(0);

        let err = service(users)
            .register(dto("bob", "bob@mail.io", "admin"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_parses_role_case_insensitively_and_inserts() {
        let mut users = MockUserStore::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_insert()
            .withf(|new| new.name == "bob" && new.role == Role::Employer)
            .returning(|new| {
                Ok(User {
                    id: 7,
                    name: new.name,
                    email: new.email,
                    password: new.password,
                    role: new.role,
                    created_at: Utc::now(),
                })
            });

        let token = service(users)
            .register(dto("bob", "bob@mail.io", "eMpLoYeR"))
            .await
            .unwrap();
        let verified = TokenService::new("test-secret", 1).verify(&token).unwrap();
        assert_eq!(verified, "bob");
    }
}
