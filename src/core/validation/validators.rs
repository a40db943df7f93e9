//! Reusable field validators
//!
//! Each validator checks one rule and returns a typed [`FieldError`] so that
//! callers (and tests) can distinguish *why* a field failed, not just that it
//! did. Validators never mutate input; normalization lives in
//! [`filters`](super::filters).

use validator::ValidateEmail;

use super::{FieldError, FieldErrorKind};

/// Field must be present and non-empty (after trimming)
pub fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::new(
            FieldErrorKind::Required,
            "This field is required",
        ))
    } else {
        Ok(())
    }
}

/// Field must not exceed a maximum length in characters
pub fn max_length(value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        Err(FieldError::new(
            FieldErrorKind::TooLong,
            format!("Ensure this value has at most {} characters", max),
        ))
    } else {
        Ok(())
    }
}

/// Email must be syntactically valid
pub fn email(value: &str) -> Result<(), FieldError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(FieldError::new(
            FieldErrorKind::InvalidEmail,
            "Enter a valid email address",
        ))
    }
}

/// Card number: after stripping whitespace, 13 to 19 digits.
///
/// Returns the stripped number on success; that stripped form is what gets
/// persisted. Non-digit characters beyond whitespace are not rejected here,
/// matching the permissiveness of the original form.
pub fn card_number(value: &str) -> Result<String, FieldError> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.len() < 13 || stripped.len() > 19 {
        Err(FieldError::new(
            FieldErrorKind::InvalidCardNumber,
            "Please enter a valid card number",
        ))
    } else {
        Ok(stripped)
    }
}

/// Expiry date must contain a `/` separator.
///
/// Deliberately lenient: month range and past dates are not checked, the
/// original form accepts any string containing a slash.
pub fn expiry_date(value: &str) -> Result<(), FieldError> {
    if value.is_empty() || !value.contains('/') {
        Err(FieldError::new(
            FieldErrorKind::InvalidExpiryFormat,
            "Please enter expiry date as MM/YYYY",
        ))
    } else {
        Ok(())
    }
}
