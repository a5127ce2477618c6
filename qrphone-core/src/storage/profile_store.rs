// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile persistence on top of a [`SecretStore`].
//!
//! Each field is its own secret. Saves and deletes are all-or-nothing: the
//! previous values are read first and written back if any step fails.

use std::sync::Arc;

use tracing::{debug, warn};

use super::secure::SecretStore;
use super::StorageError;
use crate::profile::Profile;

/// Default namespace for profile secrets.
pub const DEFAULT_NAMESPACE: &str = "profile";

/// The four secret names a profile is stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileKeys {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl ProfileKeys {
    /// Keys of the form `{namespace}.firstName`, `{namespace}.lastName`,
    /// `{namespace}.phone` and `{namespace}.email`.
    pub fn with_namespace(namespace: &str) -> Self {
        ProfileKeys {
            first_name: format!("{namespace}.firstName"),
            last_name: format!("{namespace}.lastName"),
            phone: format!("{namespace}.phone"),
            email: format!("{namespace}.email"),
        }
    }

    fn all(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.phone, &self.email]
    }
}

impl Default for ProfileKeys {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }
}

/// Loads, saves and deletes the local user's profile.
pub struct ProfileStore {
    secrets: Arc<dyn SecretStore>,
    keys: ProfileKeys,
}

impl ProfileStore {
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self::with_keys(secrets, ProfileKeys::default())
    }

    pub fn with_keys(secrets: Arc<dyn SecretStore>, keys: ProfileKeys) -> Self {
        ProfileStore { secrets, keys }
    }

    pub fn keys(&self) -> &ProfileKeys {
        &self.keys
    }

    /// Loads the stored profile.
    ///
    /// Missing or unreadable fields come back empty (email as `None`), so
    /// this returns [`Profile::empty`] when nothing was saved. Values are not
    /// re-validated.
    pub fn load(&self) -> Profile {
        let profile = Profile::from_stored(
            self.read(&self.keys.first_name),
            self.read(&self.keys.last_name),
            self.read(&self.keys.phone),
            self.read(&self.keys.email),
        );
        debug!(complete = profile.is_complete(), "loaded profile");
        profile
    }

    /// Persists a complete profile, overwriting whatever was stored.
    ///
    /// An absent email removes the email secret.
    pub fn save(&self, profile: &Profile) -> Result<(), StorageError> {
        if !profile.is_complete() {
            return Err(StorageError::InvalidData(
                "refusing to store an incomplete profile".into(),
            ));
        }

        self.apply(&[
            (&self.keys.first_name, Some(profile.first_name())),
            (&self.keys.last_name, Some(profile.last_name())),
            (&self.keys.phone, Some(profile.phone_number())),
            (&self.keys.email, profile.email()),
        ])?;

        debug!(has_email = profile.email().is_some(), "saved profile");
        Ok(())
    }

    /// Removes every profile secret.
    pub fn delete(&self) -> Result<(), StorageError> {
        let writes: Vec<(&str, Option<&str>)> =
            self.keys.all().into_iter().map(|key| (key, None)).collect();
        self.apply(&writes)?;

        debug!("deleted profile");
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.secrets.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read profile field");
                None
            }
        }
    }

    /// Applies each write (`Some` sets, `None` deletes) in order. On the
    /// first failure, keys already written are restored to their previous
    /// values and the error is returned.
    fn apply(&self, writes: &[(&str, Option<&str>)]) -> Result<(), StorageError> {
        let mut snapshot = Vec::with_capacity(writes.len());
        for (key, _) in writes {
            snapshot.push(self.secrets.get(key)?);
        }

        for (applied, (key, value)) in writes.iter().enumerate() {
            if let Err(e) = self.write(key, *value) {
                self.restore(&writes[..applied], &snapshot[..applied]);
                return Err(e);
            }
        }

        Ok(())
    }

    fn write(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        match value {
            Some(value) => self.secrets.set(key, value),
            None => self.secrets.delete(key),
        }
    }

    fn restore(&self, writes: &[(&str, Option<&str>)], previous: &[Option<String>]) {
        for ((key, _), old) in writes.iter().zip(previous) {
            if let Err(e) = self.write(key, old.as_deref()) {
                warn!(key, error = %e, "failed to roll back profile field");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileForm;
    use crate::storage::MemorySecretStore;

    fn ana() -> Profile {
        ProfileForm::new("Ana", "Gómez", "+34 600111222")
            .with_email("ana@example.com")
            .validate()
            .unwrap()
    }

    #[test]
    fn test_default_keys_are_namespaced() {
        let keys = ProfileKeys::default();
        assert_eq!(keys.first_name, "profile.firstName");
        assert_eq!(keys.last_name, "profile.lastName");
        assert_eq!(keys.phone, "profile.phone");
        assert_eq!(keys.email, "profile.email");
    }

    #[test]
    fn test_save_writes_one_secret_per_field() {
        let secrets = Arc::new(MemorySecretStore::new());
        let store = ProfileStore::new(secrets.clone());

        store.save(&ana()).unwrap();

        assert_eq!(secrets.len(), 4);
        assert_eq!(
            secrets.get("profile.phone").unwrap(),
            Some("+34 600111222".to_string())
        );
    }

    #[test]
    fn test_save_without_email_removes_old_email() {
        let secrets = Arc::new(MemorySecretStore::new());
        let store = ProfileStore::new(secrets.clone());
        store.save(&ana()).unwrap();

        let no_email = ProfileForm::new("Ana", "Gómez", "600111222")
            .validate()
            .unwrap();
        store.save(&no_email).unwrap();

        assert_eq!(secrets.get("profile.email").unwrap(), None);
        assert_eq!(store.load(), no_email);
    }

    #[test]
    fn test_save_refuses_incomplete_profile() {
        let secrets = Arc::new(MemorySecretStore::new());
        let store = ProfileStore::new(secrets.clone());

        let result = store.save(&Profile::empty());

        assert!(matches!(result, Err(StorageError::InvalidData(_))));
        assert!(secrets.is_empty());
    }

    #[test]
    fn test_custom_namespace() {
        let secrets = Arc::new(MemorySecretStore::new());
        let store = ProfileStore::with_keys(secrets.clone(), ProfileKeys::with_namespace("me"));

        store.save(&ana()).unwrap();

        assert!(secrets.contains("me.firstName").unwrap());
        assert!(!secrets.contains("profile.firstName").unwrap());
    }
}
