use thiserror::Error;

/// Error for email address validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is required")]
    Missing,

    #[error("Invalid email address format")]
    InvalidFormat,
}

/// Error for password strength validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Missing,

    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error(
        "Password too weak: must contain an uppercase letter, a lowercase letter, a digit, and a symbol"
    )]
    TooWeak,
}

/// Error for registration validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Password and confirmation do not match")]
    Mismatch,
}
