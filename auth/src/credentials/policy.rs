use super::errors::PasswordPolicyError;
use super::errors::RegistrationError;
use super::models::EmailAddress;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate password strength.
///
/// Requires at least one uppercase letter, one lowercase letter, one digit,
/// and one punctuation/symbol character; all four classes are checked in a
/// single pass over the characters.
///
/// # Arguments
/// * `password` - Plaintext password to check
///
/// # Errors
/// * `Missing` - Password is empty
/// * `TooShort` - Fewer than 8 characters
/// * `TooWeak` - One or more required character classes absent
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.is_empty() {
        return Err(PasswordPolicyError::Missing);
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }

    let mut has_uppercase = false;
    let mut has_lowercase = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    for c in password.chars() {
        if c.is_uppercase() {
            has_uppercase = true;
        } else if c.is_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !c.is_whitespace() {
            has_symbol = true;
        }
    }

    if has_uppercase && has_lowercase && has_digit && has_symbol {
        Ok(())
    } else {
        Err(PasswordPolicyError::TooWeak)
    }
}

/// Validate a registration request.
///
/// Runs email validation, then password validation, short-circuiting on the
/// first failure, then checks that the confirmation matches.
///
/// # Arguments
/// * `email` - Raw email string
/// * `password` - Plaintext password
/// * `confirm_password` - Confirmation entry, must equal `password`
///
/// # Returns
/// The validated email address
///
/// # Errors
/// * `Email` - Email validation failed
/// * `Password` - Password validation failed
/// * `Mismatch` - Password and confirmation differ
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<EmailAddress, RegistrationError> {
    let email = EmailAddress::new(email)?;
    validate_password(password)?;
    if password != confirm_password {
        return Err(RegistrationError::Mismatch);
    }
    Ok(email)
}
