// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Module
//!
//! The local user's contact record (name, phone, optional email) and the
//! raw form input it is validated from.

pub mod validation;

pub use validation::{
    is_valid_email, is_valid_phone, sanitize, ValidationError, DEFAULT_MAX_LENGTH,
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
};

use serde::Serialize;

/// A contact record.
///
/// Outside this crate a `Profile` can only be obtained by validating a
/// [`ProfileForm`], by decoding a scanned payload, or as [`Profile::empty`].
/// Email is `None` when absent; it is never `Some("")`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    first_name: String,
    last_name: String,
    phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl Profile {
    /// An all-empty profile, as returned when nothing is stored.
    pub fn empty() -> Self {
        Profile::default()
    }

    /// Assembles a profile from already sanitized and validated parts.
    pub(crate) fn from_validated(
        first_name: String,
        last_name: String,
        phone_number: String,
        email: Option<String>,
    ) -> Self {
        Profile {
            first_name,
            last_name,
            phone_number,
            email,
        }
    }

    /// Assembles a profile from persisted fields without re-validating them.
    pub(crate) fn from_stored(
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
    ) -> Self {
        Profile {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            phone_number: phone_number.unwrap_or_default(),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when every required field is present.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && !self.phone_number.is_empty()
    }

    /// Converts back into editable form input.
    pub fn to_form(&self) -> ProfileForm {
        ProfileForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
        }
    }
}

/// Unvalidated, user-entered profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl ProfileForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        ProfileForm {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email: None,
        }
    }

    /// Sets the optional email; an empty string clears it.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = if email.is_empty() { None } else { Some(email) };
        self
    }
}
