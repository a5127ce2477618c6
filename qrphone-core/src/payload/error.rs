// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Payload Error Types

use thiserror::Error;

/// Why a scanned payload was not accepted as a contact.
///
/// The variant is for diagnostics only. End users see
/// [`RejectionReason::user_message`], which is the same for every variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Payload exceeds the maximum length")]
    PayloadTooLong,

    #[error("Payload has fewer than three fields")]
    TooFewFields,

    #[error("First or last name is empty")]
    EmptyRequiredField,

    #[error("Phone number is invalid")]
    InvalidPhone,

    #[error("Email is invalid")]
    InvalidEmail,
}

impl RejectionReason {
    /// Short label safe to log; never carries payload content.
    pub fn category(&self) -> &'static str {
        match self {
            RejectionReason::PayloadTooLong => "payload_too_long",
            RejectionReason::TooFewFields => "too_few_fields",
            RejectionReason::EmptyRequiredField => "empty_required_field",
            RejectionReason::InvalidPhone => "invalid_phone",
            RejectionReason::InvalidEmail => "invalid_email",
        }
    }

    /// Generic notice shown to the user for any rejection.
    pub fn user_message(&self) -> &'static str {
        INVALID_QR_MESSAGE
    }
}

/// The single message users see for an unreadable contact code.
pub const INVALID_QR_MESSAGE: &str = "This QR code does not contain a valid contact.";

/// Errors raised while rendering a QR symbol.
#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR generation failed: {0}")]
    Generation(#[from] qrcode::types::QrError),
}
