use std::str::FromStr;

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::errors::JwtError;

/// JWT codec for the token crossing the service boundary.
///
/// Generic over the claims type; the services use [`super::UserClaims`].
/// Holds the signing secret, algorithm, and token lifetime. The identity
/// service and the document service must be configured with the same secret
/// and algorithm or every token is rejected; that parity is operational, not
/// enforced here.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_minutes: i64,
}

impl JwtHandler {
    /// Create a handler with the default HS256 algorithm.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    /// * `ttl_minutes` - Lifetime stamped into every encoded token
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        Self::with_algorithm(secret, Algorithm::HS256, ttl_minutes)
    }

    /// Create a handler with an explicit HMAC algorithm.
    pub fn with_algorithm(secret: &[u8], algorithm: Algorithm, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            ttl_minutes,
        }
    }

    /// Build a handler from configuration strings.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key
    /// * `algorithm` - Algorithm name as found in config, e.g. "HS256"
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Name is unknown or not an HMAC variant
    ///   (asymmetric schemes need key material this handler does not carry)
    pub fn from_config(secret: &str, algorithm: &str, ttl_minutes: i64) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        Ok(Self::with_algorithm(secret.as_bytes(), algorithm, ttl_minutes))
    }

    /// Encode claims into a signed token.
    ///
    /// The claims are copied into a JSON object and `exp` is injected as
    /// now + ttl (Unix seconds), overwriting any caller-supplied value.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims do not serialize to a JSON object, or
    ///   signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let mut payload = serde_json::to_value(claims)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        let map = payload
            .as_object_mut()
            .ok_or_else(|| JwtError::EncodingFailed("claims must be a JSON object".to_string()))?;

        let expiry = Utc::now() + Duration::minutes(self.ttl_minutes);
        map.insert("exp".to_string(), Value::from(expiry.timestamp()));

        let header = Header::new(self.algorithm);

        encode(&header, &payload, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Verifies the three-segment structure, the signature, and that `exp`
    /// (required) is in the future. No leeway is applied: the reference
    /// deployment compensates no clock skew, so neither does this codec.
    /// `aud` and `iss` are deliberately not validated so independently
    /// deployed services interoperate without negotiating those claims;
    /// this relaxation is part of the contract, not an oversight.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `InvalidToken` - Malformed structure, bad signature, missing `exp`,
    ///   or claims that do not deserialize into `T`
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_aud = false;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Round-trip a probe payload through encode and decode.
    ///
    /// Run once at service startup so a broken signing configuration fails
    /// the boot instead of rejecting every request later.
    pub fn self_check(&self) -> Result<(), JwtError> {
        let probe = serde_json::json!({ "probe": true });
        let token = self.encode(&probe)?;
        let _: Value = self.decode(&token)?;
        Ok(())
    }

    /// The configured algorithm, for startup logging.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configured token lifetime in minutes, for startup logging.
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        role: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        exp: Option<i64>,
    }

    fn test_claims() -> TestClaims {
        TestClaims {
            sub: "user123".to_string(),
            role: "admin".to_string(),
            exp: None,
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET, 30);

        let token = handler.encode(&test_claims()).expect("Failed to encode");
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.role, "admin");

        // exp was injected as now + ttl
        let exp = decoded.exp.expect("exp missing");
        let expected = Utc::now().timestamp() + 30 * 60;
        assert!((exp - expected).abs() <= 2);
    }

    #[test]
    fn test_encode_overwrites_caller_exp() {
        let handler = JwtHandler::new(SECRET, 30);

        let mut claims = test_claims();
        claims.exp = Some(i64::MAX);

        let token = handler.encode(&claims).expect("Failed to encode");
        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode");
        assert!(decoded.exp.unwrap() < i64::MAX);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(SECRET, 30);

        let result = handler.decode::<TestClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!", 30);
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!", 30);

        let token = handler1.encode(&test_claims()).expect("Failed to encode");

        let result = handler2.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        // Negative ttl puts exp in the past while the signature stays valid
        let handler = JwtHandler::new(SECRET, -5);

        let token = handler.encode(&test_claims()).expect("Failed to encode");

        let result = handler.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_tampered_payload() {
        let handler = JwtHandler::new(SECRET, 30);

        let token = handler.encode(&test_claims()).expect("Failed to encode");

        let mut segments: Vec<String> = token.split('.').map(String::from).collect();
        let payload = &mut segments[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        payload.replace_range(0..1, flipped);
        let tampered = segments.join(".");

        assert!(handler.decode::<TestClaims>(&tampered).is_err());
    }

    #[test]
    fn test_decode_ignores_audience_claim() {
        let handler = JwtHandler::new(SECRET, 30);

        let claims = serde_json::json!({
            "sub": "user123",
            "role": "admin",
            "aud": "some-other-service",
            "iss": "somewhere",
        });
        let token = handler.encode(&claims).expect("Failed to encode");

        // aud/iss are present but not validated
        let decoded: Value = handler.decode(&token).expect("Failed to decode");
        assert_eq!(decoded["aud"], "some-other-service");
    }

    #[test]
    fn test_encode_rejects_non_object_claims() {
        let handler = JwtHandler::new(SECRET, 30);

        let result = handler.encode(&"just a string");
        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }

    #[test]
    fn test_from_config() {
        assert!(JwtHandler::from_config("secret", "HS512", 30).is_ok());
        assert!(matches!(
            JwtHandler::from_config("secret", "RS256", 30),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            JwtHandler::from_config("secret", "not-an-alg", 30),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_self_check() {
        let handler = JwtHandler::new(SECRET, 30);
        assert!(handler.self_check().is_ok());

        // A handler that always mints expired tokens fails its own probe
        let broken = JwtHandler::new(SECRET, -1);
        assert!(broken.self_check().is_err());
    }
}
