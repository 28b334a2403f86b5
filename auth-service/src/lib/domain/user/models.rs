use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PersonNameError;
use crate::user::errors::UserIdError;

/// User identity record.
///
/// Created once at registration, read at login. The password hash never
/// leaves this process; everything else forms the public-safe projection
/// embedded in issued tokens.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub date_of_birth: NaiveDate,
    pub password_hash: String,
}

impl User {
    /// Public-safe projection of this record as token claims.
    ///
    /// Strips the password hash; `exp` is left unset for the codec to stamp.
    pub fn to_claims(&self) -> auth::UserClaims {
        auth::UserClaims {
            id: self.id.0,
            first_name: self.first_name.as_str().to_string(),
            last_name: self.last_name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            date_of_birth: self.date_of_birth,
            exp: None,
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display-name value type (first or last name).
///
/// Ensures the name is non-empty and at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 64;

    /// Create a new validated display name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name is longer than 64 characters
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        if name.trim().is_empty() {
            return Err(PersonNameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using an RFC 5322 compliant parser. Stored and
/// compared exactly as given; no case normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct CreateAccountCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub date_of_birth: NaiveDate,
    pub password: String,
}

/// Login credentials as submitted by a client.
///
/// The email is kept as a raw string: a syntactically invalid email can
/// never match a stored record, and rejecting it differently would leak
/// which inputs are worth probing.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
