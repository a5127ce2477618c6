// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Phone Core Library
//!
//! Contact exchange over QR codes: the user's profile is validated, stored
//! in a secret store and rendered as a plain-text QR payload; a scanned
//! payload is validated the same way before it reaches the contact book.

pub mod api;
pub mod contact;
pub mod crypto;
pub mod payload;
pub mod profile;
pub mod storage;

pub use api::{
    QrPhone, QrPhoneBuilder, QrPhoneConfig, QrPhoneError, QrPhoneEvent, QrPhoneResult, ScanError,
    ScanOutcome, ScanSender, ScanSession,
};
pub use contact::{ContactSink, ExistingContact, MemoryContactSink, SinkError};
pub use crypto::{decrypt, encrypt, SymmetricKey};
pub use payload::{decode, encode, QrError, RejectionReason, MAX_PAYLOAD_CHARS};
pub use profile::{
    is_valid_email, is_valid_phone, sanitize, Profile, ProfileForm, ValidationError,
};
pub use storage::{
    FileSecretStore, MemorySecretStore, ProfileKeys, ProfileStore, SecretStore, StorageError,
};
