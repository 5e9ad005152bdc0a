//! Input validation utilities

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A violated login form rule
///
/// Variants are declared in display priority order, so the first element of
/// an ordered set of violations is the one to show when only one fits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Invalid email")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Validate email
///
/// Accepts the conventional `local@domain.tld` shape: a non-empty local part,
/// a single `@`, and a domain of non-empty dot-separated labels containing at
/// least one dot.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@(?:[^@\s.]+\.)+[^@\s.]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Run every login form rule and collect all violations
pub fn validate_credentials(email: &str, password: &str) -> BTreeSet<ValidationError> {
    [validate_email(email), validate_password(password)]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}
