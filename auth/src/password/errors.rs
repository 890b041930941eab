use thiserror::Error;

/// Error type for password hashing operations.
///
/// Verification does not error: a malformed stored hash or a mismatch both
/// report as a plain `false` so callers cannot distinguish them.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
