use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Token payload shared by the identity and document services.
///
/// This is the public-safe projection of a user record (no password hash)
/// plus the expiry stamped by the codec. Both services deserialize tokens
/// into this exact shape; a missing field fails validation rather than
/// producing a partially-trusted user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaims {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,

    /// Expiration time (Unix timestamp, seconds). Always overwritten by
    /// `JwtHandler::encode`; a caller-supplied value never survives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl UserClaims {
    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
