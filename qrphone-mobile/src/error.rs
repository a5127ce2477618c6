//! Mobile-friendly error types.

use qrphone_core::api::{QrPhoneError, ScanError};
use qrphone_core::{QrError, SinkError, StorageError, ValidationError};

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    /// The profile form was refused. The message is meant for the user.
    #[error("{0}")]
    InvalidProfile(String),

    #[error("Invalid QR code")]
    InvalidQrCode,

    #[error("No scanned contact to import")]
    NothingPending,

    #[error("Contact book error: {0}")]
    ContactBookError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("QR rendering failed: {0}")]
    QrError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<ValidationError> for MobileError {
    fn from(err: ValidationError) -> Self {
        MobileError::InvalidProfile(err.user_message().to_string())
    }
}

impl From<StorageError> for MobileError {
    fn from(err: StorageError) -> Self {
        MobileError::StorageError(err.to_string())
    }
}

impl From<SinkError> for MobileError {
    fn from(err: SinkError) -> Self {
        MobileError::ContactBookError(err.to_string())
    }
}

impl From<ScanError> for MobileError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NothingPending => MobileError::NothingPending,
            ScanError::Sink(e) => e.into(),
        }
    }
}

impl From<QrError> for MobileError {
    fn from(err: QrError) -> Self {
        MobileError::QrError(err.to_string())
    }
}

impl From<QrPhoneError> for MobileError {
    fn from(err: QrPhoneError) -> Self {
        match err {
            QrPhoneError::Validation(e) => e.into(),
            QrPhoneError::Storage(e) => e.into(),
            QrPhoneError::Scan(e) => e.into(),
            QrPhoneError::Qr(e) => e.into(),
            QrPhoneError::Configuration(msg) => MobileError::ConfigurationError(msg),
        }
    }
}
