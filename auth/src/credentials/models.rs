use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::EmailError;

lazy_static! {
    /// Accepts `local@domain.tld`: alphanumeric local part (plus `. _ % + -`),
    /// dotted domain, TLD of at least two letters.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid");
}

/// Email address value type
///
/// Ensures the address matches the `local-part@domain.tld` format accepted
/// at registration. Surrounding whitespace is trimmed before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string (leading/trailing whitespace allowed)
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `Missing` - Empty after trimming
    /// * `InvalidFormat` - Does not match the accepted pattern
    pub fn new(email: &str) -> Result<Self, EmailError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(EmailError::Missing);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(EmailError::InvalidFormat);
        }
        Ok(Self(email.to_string()))
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
