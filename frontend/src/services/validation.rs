//! Local registration form checks.
//!
//! Rules run in order and the first failure wins:
//! 1. full name, email and affiliation are non-blank
//! 2. email has the `local@domain.tld` shape

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::RegistrationRequest;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// `true` for strings like `a@b.c`; no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a submission before anything is sent.
pub fn validate_registration(request: &RegistrationRequest) -> Result<(), ValidationError> {
    let required = [&request.full_name, &request.email, &request.affiliation];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !is_valid_email(request.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
