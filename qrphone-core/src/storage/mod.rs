// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Storage Module
//!
//! Secret stores for small string values and the profile store built on
//! top of them.

mod error;
pub mod profile_store;
pub mod secure;

pub use error::StorageError;
pub use profile_store::{ProfileKeys, ProfileStore, DEFAULT_NAMESPACE};
pub use secure::{FileSecretStore, MemorySecretStore, SecretStore};

#[cfg(feature = "secure-storage")]
pub use secure::PlatformKeyring;
