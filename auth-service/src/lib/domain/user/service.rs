use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::CreateAccountCommand;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AccountError;
use crate::user::ports::AccountServicePort;
use crate::user::ports::UserRepository;

/// Registration and authentication workflow.
///
/// Coordinates the injected store, password hasher, and token codec.
/// Stateless between requests; safe to share behind an `Arc`.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
    jwt_handler: Arc<auth::JwtHandler>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    /// Create a new account service with injected collaborators.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `jwt_handler` - Token codec configured with this deployment's
    ///   secret, algorithm, and TTL
    pub fn new(repository: Arc<UR>, jwt_handler: Arc<auth::JwtHandler>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
            jwt_handler,
        }
    }
}

#[async_trait]
impl<UR> AccountServicePort for AccountService<UR>
where
    UR: UserRepository,
{
    async fn create_account(&self, command: CreateAccountCommand) -> Result<User, AccountError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateEmail);
        }

        // Argon2 is CPU-bound by design; keep it off the async executor
        let hasher = self.password_hasher;
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            date_of_birth: command.date_of_birth,
            password_hash,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<String, AccountError> {
        // A syntactically invalid email cannot match any record; it gets the
        // same answer as an unknown one
        let email = EmailAddress::new(credentials.email)
            .map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let hasher = self.password_hasher;
        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
                .await
                .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))?;

        if !verified {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.jwt_handler.encode(&user.to_claims())?;
        tracing::info!(user_id = %user.id, "Token issued");

        Ok(token)
    }
}
