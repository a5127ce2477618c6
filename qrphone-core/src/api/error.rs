// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the QR Phone API layer.

use thiserror::Error;

use crate::contact::SinkError;
use crate::payload::QrError;
use crate::profile::ValidationError;
use crate::storage::StorageError;

/// Errors from the scan flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// There is no scanned contact waiting to be imported.
    #[error("no scanned contact to import")]
    NothingPending,

    /// The contact book refused the contact.
    #[error("contact book error: {0}")]
    Sink(#[from] SinkError),
}

/// Unified error type for QR Phone operations.
#[derive(Error, Debug)]
pub enum QrPhoneError {
    /// Profile validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Scan flow failed.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// QR rendering failed.
    #[error("qr error: {0}")]
    Qr(#[from] QrError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for QR Phone operations.
pub type QrPhoneResult<T> = Result<T, QrPhoneError>;
