// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Storage error types.

use thiserror::Error;

/// Storage error types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Stored value is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Secret store backend error: {0}")]
    Backend(String),
}
