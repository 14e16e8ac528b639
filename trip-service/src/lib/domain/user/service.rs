use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPair;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<(User, TokenPair), UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        // The username mirrors the email until a profile feature needs more
        let username = command.email.as_str().to_string();

        let user = self
            .repository
            .create(NewUser {
                email: command.email,
                username,
                password_hash,
            })
            .await?;

        let tokens = self
            .authenticator
            .issue_tokens(user.id.as_i64(), user.email.as_str())
            .map_err(|e| UserError::Unknown(format!("Token signing failed: {}", e)))?;

        Ok((user, tokens))
    }

    async fn login(&self, email: &str, password: &str) -> Result<(User, TokenPair), UserError> {
        let Ok(email) = EmailAddress::new(email.to_string()) else {
            // A malformed email cannot match an account; burn a hash
            // verification anyway so the response time gives nothing away.
            self.authenticator.verify_password(password, None);
            return Err(UserError::InvalidCredentials);
        };

        let user = self.repository.find_by_email(&email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.as_str());
        let verified = self.authenticator.verify_password(password, stored_hash);

        match user {
            Some(user) if verified => {
                let tokens = self
                    .authenticator
                    .issue_tokens(user.id.as_i64(), user.email.as_str())
                    .map_err(|e| UserError::Unknown(format!("Token signing failed: {}", e)))?;

                Ok((user, tokens))
            }
            _ => Err(UserError::InvalidCredentials),
        }
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn test_authenticator() -> Arc<Authenticator> {
        Arc::new(
            Authenticator::new(b"test_secret_key_at_least_32_bytes!")
                .expect("Failed to create authenticator"),
        )
    }

    fn user_from(new_user: NewUser, id: i64) -> User {
        User {
            id: UserId(id),
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|new_user| {
                new_user.email.as_str() == "alice@example.com"
                    && new_user.username == "alice@example.com"
                    && new_user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|new_user| Ok(user_from(new_user, 1)));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = SignupCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("longenough1".to_string()).unwrap(),
        );

        let (user, tokens) = service.signup(command).await.expect("Signup failed");
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(!tokens.access_token.is_empty());
        assert!(!tokens.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|new_user| {
            Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = SignupCommand::new(
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            Password::new("longenough1".to_string()).unwrap(),
        );

        let result = service.signup(command).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = test_authenticator();
        let password_hash = authenticator
            .hash_password("longenough1")
            .expect("Failed to hash password");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| {
                Ok(Some(User {
                    id: UserId(1),
                    email: email.clone(),
                    username: email.as_str().to_string(),
                    password_hash: password_hash.clone(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            });

        let service = UserService::new(Arc::new(repository), authenticator);

        let (user, tokens) = service
            .login("alice@example.com", "longenough1")
            .await
            .expect("Login failed");
        assert_eq!(user.id, UserId(1));
        assert!(!tokens.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = test_authenticator();
        let password_hash = authenticator
            .hash_password("longenough1")
            .expect("Failed to hash password");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| {
                Ok(Some(User {
                    id: UserId(1),
                    email: email.clone(),
                    username: email.as_str().to_string(),
                    password_hash: password_hash.clone(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            });

        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service.login("alice@example.com", "wrong-password").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service.login("nobody@example.com", "longenough1").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_malformed_email() {
        // The repository must not even be queried
        let repository = MockTestUserRepository::new();

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service.login("not-an-email", "longenough1").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service.get_user(UserId(99)).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
