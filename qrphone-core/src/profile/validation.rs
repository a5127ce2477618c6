// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Sanitization and validation rules shared by the save path (form input)
//! and the scan path (decoded payloads), so both accept exactly the same
//! values.

use thiserror::Error;

use super::{Profile, ProfileForm};

/// Default truncation length for [`sanitize`].
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Maximum first/last name length.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum phone number length.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Maximum email length (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Characters accepted in a phone number.
const PHONE_CHARS: &str = "+0123456789 ()-";

/// Special characters accepted in the local part of an email.
const EMAIL_LOCAL_SPECIALS: &str = "._%+-";

/// Validation error types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid phone number format")]
    InvalidPhoneFormat,
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

impl ValidationError {
    /// Message shown next to the form when a save is refused.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "First and last name cannot be empty.",
            ValidationError::InvalidPhoneFormat => {
                "The phone number contains invalid characters."
            }
            ValidationError::InvalidEmailFormat => "The email format is not valid.",
        }
    }
}

/// Trims surrounding whitespace and line breaks, then truncates to
/// `max_length` characters.
///
/// Trailing whitespace exposed by the truncation is trimmed as well, so
/// `sanitize(sanitize(s, n), n) == sanitize(s, n)`.
pub fn sanitize(value: &str, max_length: usize) -> String {
    let trimmed = value.trim();
    match trimmed.char_indices().nth(max_length) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Returns true if `value` is non-empty and only uses `+`, digits, spaces,
/// parentheses and dashes.
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| PHONE_CHARS.contains(c))
}

/// Returns true if `value` has the shape `local@domain.tld`.
///
/// The local part uses `[A-Za-z0-9._%+-]`, the domain `[A-Za-z0-9.-]`, and
/// the label after the final dot is at least two ASCII letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(c))
    {
        return false;
    }

    // Neither character class admits '@', so the host must not contain one
    // and the TLD, being letters only, must follow the last dot.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    host_ok && tld_ok
}

impl ProfileForm {
    /// Sanitizes every field and validates the result.
    ///
    /// Checks run in order name, phone, email; the first failure is returned.
    pub fn validate(&self) -> Result<Profile, ValidationError> {
        let first_name = sanitize(&self.first_name, MAX_NAME_LENGTH);
        let last_name = sanitize(&self.last_name, MAX_NAME_LENGTH);
        let phone_number = sanitize(&self.phone_number, MAX_PHONE_LENGTH);
        let raw_email = sanitize(self.email.as_deref().unwrap_or(""), MAX_EMAIL_LENGTH);

        if first_name.is_empty() || last_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !is_valid_phone(&phone_number) {
            return Err(ValidationError::InvalidPhoneFormat);
        }

        let email = if raw_email.is_empty() {
            None
        } else if is_valid_email(&raw_email) {
            Some(raw_email)
        } else {
            return Err(ValidationError::InvalidEmailFormat);
        };

        Ok(Profile::from_validated(
            first_name,
            last_name,
            phone_number,
            email,
        ))
    }
}
