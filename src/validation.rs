// common checks applied before any request leaves the client
use crate::api::ApiError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[must_use]
pub fn valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email.trim()))
}

/// # Errors
/// Returns `ApiError::Validation` naming the field when `value` is blank.
pub fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// # Errors
/// Returns `ApiError::Validation` when `email` is blank or malformed.
pub fn require_email(email: &str) -> Result<(), ApiError> {
    require(email, "Email")?;
    if valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::validation("Please enter a valid email address"))
    }
}
