use chrono::Duration;
use serde::Serialize;

use crate::config::AuthConfig;
use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Constructed once at process start from immutable configuration and shared
/// by reference across concurrent requests; holds no mutable state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

/// Token pair returned to a successfully authenticated caller.
///
/// Access and refresh tokens share the same structure and signing logic and
/// differ only in lifetime; how each is used is up to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in_seconds: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Password did not match the stored hash. Deliberately carries no
    /// detail, so "wrong password" is indistinguishable from "no such user"
    /// when the caller maps lookup failures onto this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator from configuration.
    ///
    /// # Arguments
    /// * `config` - Signing secret, token lifetimes, and hashing work factor
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(config.work_factor),
            jwt_handler: JwtHandler::new(config.secret.as_bytes()),
            access_token_ttl: Duration::hours(config.access_token_hours),
            refresh_token_ttl: Duration::days(config.refresh_token_days),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns `false` for a mismatch or a malformed hash, never an error.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject_id` - Identifier to embed in the tokens
    /// * `email` - Email address to embed in the tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token issuance failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        subject_id: &str,
        email: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_tokens(subject_id, email)?)
    }

    /// Issue a token pair without password verification.
    ///
    /// Useful for refresh flows where authentication has already been
    /// established by a valid refresh token.
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_tokens(&self, subject_id: &str, email: &str) -> Result<TokenPair, TokenError> {
        let access_token = self
            .jwt_handler
            .issue(subject_id, email, self.access_token_ttl)?;
        let refresh_token = self
            .jwt_handler
            .issue(subject_id, email, self.refresh_token_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in_seconds: self.access_token_ttl.num_seconds(),
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.jwt_handler.validate(token)
    }
}
