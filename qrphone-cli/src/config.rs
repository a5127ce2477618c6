//! CLI Configuration

use std::path::PathBuf;

use anyhow::{bail, Result};
use qrphone_core::storage::SecretStore;
use qrphone_core::SymmetricKey;

#[cfg(feature = "secure-storage")]
use qrphone_core::storage::PlatformKeyring;

#[cfg(not(feature = "secure-storage"))]
use qrphone_core::storage::FileSecretStore;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for storage.
    pub data_dir: PathBuf,
}

/// Key name used in the secret store.
const KEY_NAME: &str = "storage_key";

impl CliConfig {
    /// Directory of the encrypted profile secrets.
    pub fn secrets_dir(&self) -> PathBuf {
        self.data_dir.join("secrets")
    }

    /// Directory of imported contacts, one `.vcf` file each.
    pub fn contacts_dir(&self) -> PathBuf {
        self.data_dir.join("contacts")
    }

    /// Loads or creates the encryption key for the profile secrets.
    ///
    /// When the `secure-storage` feature is enabled, uses the OS keychain.
    /// Otherwise, falls back to an encrypted key file.
    pub fn storage_key(&self) -> Result<SymmetricKey> {
        let store = self.key_store();

        match store.get(KEY_NAME) {
            Ok(Some(encoded)) => {
                let bytes = hex::decode(encoded.trim())
                    .map_err(|e| anyhow::anyhow!("Invalid storage key encoding: {}", e))?;
                match SymmetricKey::from_slice(&bytes) {
                    Some(key) => Ok(key),
                    None => bail!("Invalid storage key length"),
                }
            }
            Ok(None) => {
                let key = SymmetricKey::generate()?;
                store
                    .set(KEY_NAME, &hex::encode(key.as_bytes()))
                    .map_err(|e| anyhow::anyhow!("Failed to save storage key: {}", e))?;
                Ok(key)
            }
            Err(e) => bail!("Storage error: {}", e),
        }
    }

    #[cfg(feature = "secure-storage")]
    fn key_store(&self) -> Box<dyn SecretStore> {
        Box::new(PlatformKeyring::new("qrphone-cli"))
    }

    #[cfg(not(feature = "secure-storage"))]
    fn key_store(&self) -> Box<dyn SecretStore> {
        // Fallback key for encrypting the storage key file
        let fallback_key = SymmetricKey::from_bytes([
            0x51, 0x52, 0x50, 0x68, 0x6f, 0x6e, 0x65, 0x43, // "QRPhoneC"
            0x6c, 0x69, 0x4b, 0x65, 0x79, 0x46, 0x61, 0x6c, // "liKeyFal"
            0x6c, 0x62, 0x61, 0x63, 0x6b, 0x56, 0x31, 0x00, // "lbackV1\0"
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // "\0\0\0\0\0\0\0\0"
        ]);

        Box::new(FileSecretStore::new(self.data_dir.join("keys"), fallback_key))
    }
}
