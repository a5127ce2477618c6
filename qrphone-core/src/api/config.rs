// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Configuration
//!
//! Configuration types for the QR Phone API layer.

use std::path::PathBuf;

use crate::crypto::SymmetricKey;
use crate::storage::DEFAULT_NAMESPACE;

/// Default keychain service name.
pub const DEFAULT_KEYRING_SERVICE: &str = "qrphone";

/// Configuration for a QrPhone instance.
#[derive(Debug, Clone)]
pub struct QrPhoneConfig {
    /// Prefix of the profile secret names (`{namespace}.firstName`, ...).
    pub key_namespace: String,

    /// Service name used with the platform keychain.
    pub keyring_service: String,

    /// Directory for the encrypted-file secret store.
    /// If None, the platform keychain is used when available.
    pub secrets_path: Option<PathBuf>,

    /// Encryption key for the encrypted-file secret store.
    pub storage_key: Option<SymmetricKey>,
}

impl Default for QrPhoneConfig {
    fn default() -> Self {
        QrPhoneConfig {
            key_namespace: DEFAULT_NAMESPACE.to_string(),
            keyring_service: DEFAULT_KEYRING_SERVICE.to_string(),
            secrets_path: None,
            storage_key: None,
        }
    }
}

impl QrPhoneConfig {
    /// Sets the secret name namespace.
    pub fn with_key_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.key_namespace = namespace.into();
        self
    }

    /// Sets the keychain service name.
    pub fn with_keyring_service(mut self, service: impl Into<String>) -> Self {
        self.keyring_service = service.into();
        self
    }

    /// Stores secrets as encrypted files under `path` with `key`.
    pub fn with_file_secrets(mut self, path: impl Into<PathBuf>, key: SymmetricKey) -> Self {
        self.secrets_path = Some(path.into());
        self.storage_key = Some(key);
        self
    }
}
