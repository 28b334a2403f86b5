//! Shared authentication library
//!
//! Provides the pieces both services need to agree on:
//! - Password hashing (Argon2id)
//! - JWT token encoding and validation
//! - The token payload schema (`UserClaims`)
//!
//! The identity service and the document service are deployed independently
//! and share no database. The only thing that crosses the boundary is the
//! signed token, so the claim schema lives here: a field rename becomes a
//! compile error in both services instead of a silent integration failure.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, UserClaims};
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", 30);
//! let claims = UserClaims {
//!     id: Uuid::new_v4(),
//!     first_name: "Ada".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
//!     exp: None,
//! };
//! let token = handler.encode(&claims).unwrap();
//! let decoded: UserClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.email, claims.email);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Algorithm;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::UserClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
