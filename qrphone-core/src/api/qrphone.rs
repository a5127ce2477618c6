// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Phone Orchestrator
//!
//! Main entry point for the QR Phone API.

use std::sync::Arc;

use crate::contact::{ContactSink, MemoryContactSink};
use crate::storage::{FileSecretStore, MemorySecretStore, ProfileKeys, ProfileStore, SecretStore};

use super::config::QrPhoneConfig;
use super::error::{QrPhoneError, QrPhoneResult};
use super::events::{CallbackHandler, EventDispatcher, EventHandler, QrPhoneEvent};
use super::profile_controller::ProfileController;
use super::scan::ScanController;

/// Main QR Phone orchestrator.
///
/// Owns the profile and scan controllers and the event dispatcher they
/// share.
///
/// # Example
///
/// ```ignore
/// use qrphone_core::api::QrPhoneBuilder;
/// use qrphone_core::profile::ProfileForm;
///
/// let mut app = QrPhoneBuilder::new()
///     .secret_store(store)
///     .contact_sink(sink)
///     .on_event(|event| println!("{:?}", event))
///     .build()?;
///
/// app.profile_mut().save(&ProfileForm::new("Ana", "Gómez", "600111222"))?;
/// let payload = app.profile().payload();
/// ```
pub struct QrPhone<K: ContactSink = MemoryContactSink> {
    config: QrPhoneConfig,
    profile: ProfileController,
    scan: ScanController<K>,
    events: Arc<EventDispatcher>,
}

impl QrPhone<MemoryContactSink> {
    /// Creates an instance with in-memory secrets and contact book (for testing).
    pub fn in_memory() -> Self {
        let config = QrPhoneConfig::default();
        Self::assemble(
            config,
            Arc::new(MemorySecretStore::new()),
            MemoryContactSink::new(),
            EventDispatcher::new(),
        )
    }
}

impl<K: ContactSink> QrPhone<K> {
    fn assemble(
        config: QrPhoneConfig,
        secrets: Arc<dyn SecretStore>,
        sink: K,
        events: EventDispatcher,
    ) -> Self {
        let events = Arc::new(events);
        let store = ProfileStore::with_keys(
            secrets,
            ProfileKeys::with_namespace(&config.key_namespace),
        );

        QrPhone {
            profile: ProfileController::new(store, events.clone()),
            scan: ScanController::new(sink, events.clone()),
            config,
            events,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &QrPhoneConfig {
        &self.config
    }

    /// The save flow.
    pub fn profile(&self) -> &ProfileController {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileController {
        &mut self.profile
    }

    /// The scan flow.
    pub fn scan(&self) -> &ScanController<K> {
        &self.scan
    }

    pub fn scan_mut(&mut self) -> &mut ScanController<K> {
        &mut self.scan
    }

    /// Number of registered event handlers.
    pub fn event_handler_count(&self) -> usize {
        self.events.handler_count()
    }
}

/// Builder for QrPhone instances.
pub struct QrPhoneBuilder<K: ContactSink> {
    config: QrPhoneConfig,
    secrets: Option<Arc<dyn SecretStore>>,
    sink: Option<K>,
    events: EventDispatcher,
}

impl<K: ContactSink> QrPhoneBuilder<K> {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        QrPhoneBuilder {
            config: QrPhoneConfig::default(),
            secrets: None,
            sink: None,
            events: EventDispatcher::new(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: QrPhoneConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses `store` for the profile secrets, overriding the configured one.
    pub fn secret_store(mut self, store: Arc<dyn SecretStore>) -> Self {
        self.secrets = Some(store);
        self
    }

    /// Sets the contact book scanned contacts are imported into.
    pub fn contact_sink(mut self, sink: K) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Registers an event handler.
    pub fn event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.events.add_handler(handler);
        self
    }

    /// Registers a closure as an event handler.
    pub fn on_event<F>(self, callback: F) -> Self
    where
        F: Fn(QrPhoneEvent) + Send + Sync + 'static,
    {
        self.event_handler(Arc::new(CallbackHandler::new(callback)))
    }

    /// Builds the QrPhone instance.
    ///
    /// Secrets come from, in order: an explicit [`secret_store`](Self::secret_store),
    /// the configured encrypted-file directory, or the platform keychain
    /// when the `secure-storage` feature is enabled.
    pub fn build(self) -> QrPhoneResult<QrPhone<K>> {
        let sink = self
            .sink
            .ok_or_else(|| QrPhoneError::Configuration("no contact sink configured".into()))?;
        let secrets = match self.secrets {
            Some(secrets) => secrets,
            None => configured_store(&self.config)?,
        };

        Ok(QrPhone::assemble(self.config, secrets, sink, self.events))
    }
}

impl<K: ContactSink> Default for QrPhoneBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn configured_store(config: &QrPhoneConfig) -> QrPhoneResult<Arc<dyn SecretStore>> {
    if let Some(path) = &config.secrets_path {
        let key = config.storage_key.clone().ok_or_else(|| {
            QrPhoneError::Configuration("secrets path set without a storage key".into())
        })?;
        return Ok(Arc::new(FileSecretStore::new(path.clone(), key)));
    }

    platform_store(config)
}

#[cfg(feature = "secure-storage")]
fn platform_store(config: &QrPhoneConfig) -> QrPhoneResult<Arc<dyn SecretStore>> {
    Ok(Arc::new(crate::storage::PlatformKeyring::new(
        config.keyring_service.clone(),
    )))
}

#[cfg(not(feature = "secure-storage"))]
fn platform_store(_config: &QrPhoneConfig) -> QrPhoneResult<Arc<dyn SecretStore>> {
    Err(QrPhoneError::Configuration(
        "no secret store configured".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SymmetricKey;
    use crate::profile::ProfileForm;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_starts_empty() {
        let app = QrPhone::in_memory();
        assert!(!app.profile().has_saved_profile());
        assert_eq!(app.event_handler_count(), 0);
    }

    #[test]
    fn test_builder_with_file_secrets_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let key = SymmetricKey::generate().unwrap();
        let config = QrPhoneConfig::default().with_file_secrets(temp_dir.path(), key);

        let mut app = QrPhoneBuilder::new()
            .contact_sink(MemoryContactSink::new())
            .config(config.clone())
            .build()
            .unwrap();
        app.profile_mut()
            .save(&ProfileForm::new("Ana", "Gómez", "600111222"))
            .unwrap();

        let app = QrPhoneBuilder::new()
            .contact_sink(MemoryContactSink::new())
            .config(config)
            .build()
            .unwrap();
        assert!(app.profile().has_saved_profile());
    }

    #[test]
    fn test_builder_rejects_path_without_key() {
        let mut config = QrPhoneConfig::default();
        config.secrets_path = Some("/nonexistent".into());

        let result = QrPhoneBuilder::new()
            .contact_sink(MemoryContactSink::new())
            .config(config)
            .build();

        assert!(matches!(result, Err(QrPhoneError::Configuration(_))));
    }

    #[test]
    fn test_builder_uses_namespace() {
        let secrets = Arc::new(MemorySecretStore::new());
        let mut app = QrPhoneBuilder::new()
            .contact_sink(MemoryContactSink::new())
            .config(QrPhoneConfig::default().with_key_namespace("me"))
            .secret_store(secrets.clone())
            .build()
            .unwrap();

        app.profile_mut()
            .save(&ProfileForm::new("Ana", "Gómez", "600111222"))
            .unwrap();

        assert!(secrets.contains("me.phone").unwrap());
    }
}
