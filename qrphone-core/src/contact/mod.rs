// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The address book a scanned contact is imported into. The platform side
//! implements [`ContactSink`]; the core only asks it for duplicates and
//! hands it validated profiles.

pub mod vcard;

pub use vcard::{export_vcard, import_vcard, VCardContact, VCardError};

use std::sync::Mutex;

use thiserror::Error;

use crate::profile::Profile;

/// Contact-book errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Contact book unavailable: {0}")]
    Unavailable(String),

    #[error("Permission to access contacts was denied")]
    PermissionDenied,

    #[error("Failed to write contact: {0}")]
    WriteFailed(String),
}

/// A contact already in the address book, as reported by a duplicate lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExistingContact {
    pub given_name: String,
    pub family_name: String,
}

impl ExistingContact {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        ExistingContact {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    /// Given and family name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        match (self.given_name.is_empty(), self.family_name.is_empty()) {
            (false, false) => format!("{} {}", self.given_name, self.family_name),
            (false, true) => self.given_name.clone(),
            (true, false) => self.family_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Destination for imported contacts.
pub trait ContactSink: Send + Sync {
    /// Contacts whose phone number matches `phone`.
    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingContact>, SinkError>;

    /// Adds `profile` as a new contact.
    fn save_contact(&self, profile: &Profile) -> Result<(), SinkError>;
}

/// Reduces a phone number to its digits for comparison.
///
/// `"+34 (600) 111-222"` and `"34600111222"` normalize to the same value.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// True when both numbers have digits and the digits are equal.
pub fn phones_match(a: &str, b: &str) -> bool {
    let a = normalize_phone(a);
    !a.is_empty() && a == normalize_phone(b)
}

/// In-memory contact book.
#[derive(Default)]
pub struct MemoryContactSink {
    contacts: Mutex<Vec<Profile>>,
}

impl MemoryContactSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `contacts` already present.
    pub fn with_contacts(contacts: Vec<Profile>) -> Self {
        MemoryContactSink {
            contacts: Mutex::new(contacts),
        }
    }

    /// Snapshot of every stored contact.
    pub fn contacts(&self) -> Vec<Profile> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Profile>> {
        self.contacts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ContactSink for MemoryContactSink {
    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingContact>, SinkError> {
        Ok(self
            .lock()
            .iter()
            .filter(|c| phones_match(c.phone_number(), phone))
            .map(|c| ExistingContact::new(c.first_name(), c.last_name()))
            .collect())
    }

    fn save_contact(&self, profile: &Profile) -> Result<(), SinkError> {
        self.lock().push(profile.clone());
        Ok(())
    }
}
