// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Secret Store Module
//!
//! Named string secrets backed by the platform keychain when available,
//! with an encrypted-file fallback and an in-memory store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::crypto::SymmetricKey;
use crate::storage::StorageError;

/// Key-value store for small string secrets.
///
/// Implementations should use platform-native secure storage when available:
/// - macOS/iOS: Keychain
/// - Linux: Secret Service (GNOME Keyring, KDE Wallet)
/// - Windows: Credential Manager
pub trait SecretStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Returns the value for `key`, or None if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Checks if a key exists.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Platform keyring implementation using the `keyring` crate.
/// Available when the `secure-storage` feature is enabled.
#[cfg(feature = "secure-storage")]
pub struct PlatformKeyring {
    service: String,
}

#[cfg(feature = "secure-storage")]
impl PlatformKeyring {
    /// Creates a keyring accessor for `service` (e.g. "qrphone").
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, StorageError> {
        keyring::Entry::new(&self.service, key)
            .map_err(|e| StorageError::Backend(format!("Keyring error: {}", e)))
    }
}

#[cfg(feature = "secure-storage")]
impl SecretStore for PlatformKeyring {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| StorageError::Backend(format!("Failed to save to keychain: {}", e)))
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(keyring::Error::BadEncoding(_)) => Err(StorageError::Encoding(key.to_string())),
            Err(e) => Err(StorageError::Backend(format!(
                "Failed to load from keychain: {}",
                e
            ))),
        }
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StorageError::Backend(format!(
                "Failed to delete from keychain: {}",
                e
            ))),
        }
    }
}

/// File-based secret storage (fallback when keyring is unavailable).
///
/// Each secret is one file, encrypted with XChaCha20-Poly1305.
pub struct FileSecretStore {
    path: PathBuf,
    encryption_key: SymmetricKey,
}

impl FileSecretStore {
    /// Creates a store rooted at `path`; the directory is created on first write.
    pub fn new(path: PathBuf, encryption_key: SymmetricKey) -> Self {
        Self {
            path,
            encryption_key,
        }
    }

    fn secret_file_path(&self, key: &str) -> PathBuf {
        // Sanitize the name to prevent path traversal
        let safe_name = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>();
        self.path.join(format!("{}.secret", safe_name))
    }
}

impl SecretStore for FileSecretStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.path)?;

        let encrypted = crate::crypto::encrypt(&self.encryption_key, value.as_bytes())
            .map_err(|e| StorageError::Encryption(e.to_string()))?;

        std::fs::write(self.secret_file_path(key), encrypted)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let file_path = self.secret_file_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let encrypted = std::fs::read(&file_path)?;
        let plaintext = crate::crypto::decrypt(&self.encryption_key, &encrypted)
            .map_err(|e| StorageError::Encryption(e.to_string()))?;

        String::from_utf8(plaintext)
            .map(Some)
            .map_err(|_| StorageError::Encoding(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let file_path = self.secret_file_path(key);

        if file_path.exists() {
            std::fs::remove_file(&file_path)?;
        }

        Ok(())
    }
}

/// In-memory secret store for tests and sessions without persistence.
#[derive(Default)]
pub struct MemorySecretStore {
    secrets: Mutex<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of secrets currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.secrets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SecretStore for MemorySecretStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}
