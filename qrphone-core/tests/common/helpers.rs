// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Helpers
//!
//! Fake collaborators for exercising failure paths.

use std::sync::{Arc, Mutex};

use qrphone_core::api::{CallbackHandler, EventHandler, QrPhoneEvent};
use qrphone_core::contact::{ContactSink, ExistingContact, SinkError};
use qrphone_core::storage::{MemorySecretStore, SecretStore, StorageError};
use qrphone_core::Profile;

/// Secret store that fails writes to one key and counts every write.
pub struct FailingSecretStore {
    inner: MemorySecretStore,
    fail_on: Mutex<Option<String>>,
    writes: Mutex<usize>,
}

impl FailingSecretStore {
    pub fn new() -> Self {
        FailingSecretStore {
            inner: MemorySecretStore::new(),
            fail_on: Mutex::new(None),
            writes: Mutex::new(0),
        }
    }

    /// Makes every set or delete of `key` fail from now on.
    pub fn fail_on(&self, key: &str) {
        *self.fail_on.lock().unwrap() = Some(key.to_string());
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        *self.writes.lock().unwrap() += 1;
        if self.fail_on.lock().unwrap().as_deref() == Some(key) {
            return Err(StorageError::Backend(format!("injected failure on {key}")));
        }
        Ok(())
    }
}

impl SecretStore for FailingSecretStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.delete(key)
    }
}

/// Contact sink whose operations always fail.
pub struct BrokenContactSink;

impl ContactSink for BrokenContactSink {
    fn find_by_phone(&self, _phone: &str) -> Result<Vec<ExistingContact>, SinkError> {
        Err(SinkError::PermissionDenied)
    }

    fn save_contact(&self, _profile: &Profile) -> Result<(), SinkError> {
        Err(SinkError::WriteFailed("read-only".into()))
    }
}

/// Event handler that records every event it receives.
pub fn recording_handler() -> (Arc<dyn EventHandler>, Arc<Mutex<Vec<QrPhoneEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let handler = CallbackHandler::new(move |event| sink.lock().unwrap().push(event));
    (Arc::new(handler), events)
}
