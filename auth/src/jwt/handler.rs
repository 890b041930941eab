use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token issuer and validator.
///
/// Signs and checks identity tokens with a symmetric MAC (HS256). Validation
/// decodes the structure, verifies the signature before trusting any claim
/// value, then checks expiry, in that order.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotate secrets periodically
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Stamps `iat` with the current time and `exp` with `now + ttl`, signs
    /// the claims, and returns the encoded token.
    ///
    /// # Arguments
    /// * `subject_id` - Unique subject identifier
    /// * `email` - Subject's email address
    /// * `ttl` - Time until the token expires
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject_id: &str,
        email: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.encode(&Claims::for_subject(subject_id, email, ttl))
    }

    /// Encode pre-built claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Checks run in a fixed order: structure, then signature, then expiry.
    /// A forged token is rejected before its claims are inspected, so its
    /// expiry is never reported.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Errors
    /// * `Malformed` - The encoding or payload structure is not well-formed
    /// * `BadSignature` - Signature does not match the secret
    /// * `Expired` - Token expiration has passed
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_validate_round_trip() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue("user123", "user@example.com", Duration::hours(1))
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.validate(&token).expect("Failed to validate token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_validate_garbage_is_malformed() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.validate("garbage");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_validate_with_wrong_secret_is_bad_signature() {
        let issuer = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let validator = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("user123", "user@example.com", Duration::hours(1))
            .expect("Failed to issue token");

        let result = validator.validate(&token);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_validate_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue("user123", "user@example.com", Duration::seconds(-10))
            .expect("Failed to issue token");

        let result = handler.validate(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_tampered_claims_are_rejected() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue("user123", "user@example.com", Duration::hours(1))
            .expect("Failed to issue token");

        // Swap the payload segment for one claiming a different subject.
        let forged_payload = JwtHandler::new(b"attacker_key_at_least_32_bytes_ok!")
            .issue("admin", "admin@example.com", Duration::hours(1))
            .expect("Failed to issue token");

        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged_payload.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        let result = handler.validate(&forged);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }
}
