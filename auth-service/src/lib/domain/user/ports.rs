use async_trait::async_trait;

use crate::domain::user::models::CreateAccountCommand;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::AccountError;

/// Port for the registration and authentication workflow.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Checks email uniqueness, hashes the password, and persists the
    /// record. Exactly one insert on success, none on duplicate.
    ///
    /// # Arguments
    /// * `command` - Validated registration fields with plaintext password
    ///
    /// # Returns
    /// The created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `Database` - Store operation failed
    async fn create_account(&self, command: CreateAccountCommand) -> Result<User, AccountError>;

    /// Verify credentials and issue a signed token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Signed bearer token carrying the public-safe projection
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; the two
    ///   cases are indistinguishable by design
    /// * `Token` - Token generation failed
    /// * `Database` - Store operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<String, AccountError>;
}

/// Persistence operations for user identity records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Arguments
    /// * `user` - User entity to create (id already assigned)
    ///
    /// # Returns
    /// The created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Unique email constraint violated
    /// * `Database` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AccountError>;

    /// Retrieve a user by email address, the sole lookup key.
    ///
    /// # Arguments
    /// * `email` - Email address to search for, matched exactly
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AccountError>;
}
