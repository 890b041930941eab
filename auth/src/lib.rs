//! Credential and token authentication core
//!
//! Turns raw credentials into a verifiable identity assertion and gates
//! subsequent requests on the validity of that assertion:
//! - Credential policy (email format, password strength)
//! - Password hashing (Argon2id, tunable work factor)
//! - Token issuance and validation (HS256, access/refresh pair)
//! - Request gate middleware attaching identity to the request context
//!
//! Persistence, routing, and business entities are external collaborators;
//! this crate only answers "is this credential acceptable?" and "is this
//! request authenticated?".
//!
//! # Examples
//!
//! ## Credential Policy
//! ```
//! use auth::credentials::validate_registration;
//!
//! let email = validate_registration("user@example.com", "Secure123!", "Secure123!").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(1);
//! let hash = hasher.hash("Secure123!").unwrap();
//! assert!(hasher.verify("Secure123!", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator};
//!
//! let config = AuthConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     access_token_hours: 1,
//!     refresh_token_days: 7,
//!     work_factor: 1,
//! };
//! let auth = Authenticator::new(&config);
//!
//! // Register: hash password
//! let hash = auth.hash_password("Secure123!").unwrap();
//!
//! // Login: verify and issue a token pair
//! let tokens = auth.login("Secure123!", &hash, "user123", "user@example.com").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&tokens.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod config;
pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use config::AuthConfig;
pub use config::Config;
pub use credentials::EmailAddress;
pub use credentials::EmailError;
pub use credentials::PasswordPolicyError;
pub use credentials::RegistrationError;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use middleware::AuthenticatedUser;
pub use password::PasswordError;
pub use password::PasswordHasher;
