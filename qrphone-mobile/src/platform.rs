// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform Callbacks
//!
//! Callback interfaces for the platform keychain and address book.
//! iOS implements them over Keychain Services and CNContactStore, Android
//! over EncryptedSharedPreferences and the ContactsContract provider.

use std::sync::Arc;

use qrphone_core::{ContactSink, ExistingContact, Profile, SecretStore, SinkError, StorageError};
use tracing::warn;

use crate::types::{MobileExistingContact, MobileProfile};

/// Status a [`PlatformContactBook`] returns when contacts access is denied.
pub const PERMISSION_DENIED: &str = "permission_denied";

/// Status a [`PlatformContactBook`] returns when there is no address book.
pub const UNAVAILABLE: &str = "unavailable";

/// Callback interface for the platform keychain.
///
/// Implement this trait in Swift (iOS) or Kotlin (Android).
#[uniffi::export(callback_interface)]
pub trait PlatformSecretStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Returns empty string on success, error message on failure.
    fn set(&self, key: String, value: String) -> String;

    /// Read the value stored under `key`.
    ///
    /// Returns None when the key is missing or cannot be read.
    fn get(&self, key: String) -> Option<String>;

    /// Remove `key`. Removing a missing key is a success.
    ///
    /// Returns empty string on success, error message on failure.
    fn delete(&self, key: String) -> String;
}

/// Callback interface for the platform address book.
///
/// Implement this trait in Swift (iOS) or Kotlin (Android).
#[uniffi::export(callback_interface)]
pub trait PlatformContactBook: Send + Sync {
    /// Contacts whose phone number matches `phone_number`.
    ///
    /// Return an empty list when there are none or the lookup fails.
    fn find_by_phone(&self, phone_number: String) -> Vec<MobileExistingContact>;

    /// Add `profile` as a new contact.
    ///
    /// Returns empty string on success, "permission_denied" or
    /// "unavailable" for those cases, or an error message.
    fn save_contact(&self, profile: MobileProfile) -> String;
}

/// [`SecretStore`] over a [`PlatformSecretStore`] callback.
pub struct PlatformSecretStoreAdapter {
    inner: Arc<dyn PlatformSecretStore>,
}

impl PlatformSecretStoreAdapter {
    pub fn new(inner: Arc<dyn PlatformSecretStore>) -> Self {
        PlatformSecretStoreAdapter { inner }
    }
}

fn status_to_storage(status: String) -> Result<(), StorageError> {
    if status.is_empty() {
        Ok(())
    } else {
        Err(StorageError::Backend(status))
    }
}

impl SecretStore for PlatformSecretStoreAdapter {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        status_to_storage(self.inner.set(key.to_string(), value.to_string()))
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.get(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        status_to_storage(self.inner.delete(key.to_string()))
    }
}

/// [`ContactSink`] over a [`PlatformContactBook`] callback.
pub struct PlatformContactBookAdapter {
    inner: Arc<dyn PlatformContactBook>,
}

impl PlatformContactBookAdapter {
    pub fn new(inner: Arc<dyn PlatformContactBook>) -> Self {
        PlatformContactBookAdapter { inner }
    }
}

impl ContactSink for PlatformContactBookAdapter {
    fn find_by_phone(&self, phone: &str) -> Result<Vec<ExistingContact>, SinkError> {
        Ok(self
            .inner
            .find_by_phone(phone.to_string())
            .into_iter()
            .map(ExistingContact::from)
            .collect())
    }

    fn save_contact(&self, profile: &Profile) -> Result<(), SinkError> {
        let status = self.inner.save_contact(profile.into());
        match status.as_str() {
            "" => Ok(()),
            PERMISSION_DENIED => Err(SinkError::PermissionDenied),
            UNAVAILABLE => Err(SinkError::Unavailable("no address book".into())),
            _ => {
                warn!("platform address book refused contact");
                Err(SinkError::WriteFailed(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StatusBook(&'static str);

    impl PlatformContactBook for StatusBook {
        fn find_by_phone(&self, _phone_number: String) -> Vec<MobileExistingContact> {
            vec![MobileExistingContact {
                given_name: "Ana".into(),
                family_name: "Gómez".into(),
            }]
        }

        fn save_contact(&self, _profile: MobileProfile) -> String {
            self.0.to_string()
        }
    }

    fn profile() -> Profile {
        qrphone_core::decode("Ana\nGómez\n600111222\n").unwrap()
    }

    #[test]
    fn test_save_status_mapping() {
        let save = |status| {
            PlatformContactBookAdapter::new(Arc::new(StatusBook(status))).save_contact(&profile())
        };

        assert_eq!(save(""), Ok(()));
        assert_eq!(save(PERMISSION_DENIED), Err(SinkError::PermissionDenied));
        assert!(matches!(save(UNAVAILABLE), Err(SinkError::Unavailable(_))));
        assert_eq!(
            save("disk full"),
            Err(SinkError::WriteFailed("disk full".into()))
        );
    }

    #[test]
    fn test_find_by_phone_converts_contacts() {
        let book = PlatformContactBookAdapter::new(Arc::new(StatusBook("")));
        let found = book.find_by_phone("600111222").unwrap();
        assert_eq!(found, vec![ExistingContact::new("Ana", "Gómez")]);
    }
}
