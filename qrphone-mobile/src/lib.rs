//! QR Phone Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a simplified, mobile-friendly API on top of qrphone-core. The
//! keychain and address book stay on the platform side and are reached
//! through callback interfaces.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use qrphone_core::api::{QrPhone, QrPhoneBuilder, QrPhoneConfig};
use qrphone_core::profile::DEFAULT_MAX_LENGTH;
use qrphone_core::ProfileForm;

// === Modules ===

mod error;
mod platform;
mod types;

// Re-export public types
pub use error::MobileError;
pub use platform::{
    PlatformContactBook, PlatformContactBookAdapter, PlatformSecretStore,
    PlatformSecretStoreAdapter, PERMISSION_DENIED, UNAVAILABLE,
};
pub use types::{MobileExistingContact, MobileProfile, MobileScanOutcome};

uniffi::setup_scaffolding!();

/// SVG size used when the caller passes 0.
const DEFAULT_QR_SIZE: u32 = 256;

// === Codec ===

/// Encode a profile into its QR payload.
///
/// The profile is validated first, so only a payload that will decode on
/// the other side is ever produced.
#[uniffi::export]
pub fn encode_payload(profile: MobileProfile) -> Result<String, MobileError> {
    let profile = ProfileForm::from(profile).validate()?;
    Ok(qrphone_core::encode(&profile))
}

/// Decode and validate a scanned payload.
#[uniffi::export]
pub fn decode_payload(raw: String) -> Result<MobileProfile, MobileError> {
    match qrphone_core::decode(&raw) {
        Ok(profile) => Ok((&profile).into()),
        Err(reason) => {
            debug!(reason = reason.category(), "payload rejected");
            Err(MobileError::InvalidQrCode)
        }
    }
}

// === Validation ===

#[uniffi::export]
pub fn is_valid_phone(phone_number: String) -> bool {
    qrphone_core::is_valid_phone(&phone_number)
}

#[uniffi::export]
pub fn is_valid_email(email: String) -> bool {
    qrphone_core::is_valid_email(&email)
}

/// Trim and truncate user input the way saved fields are.
///
/// A `max_length` of 0 uses the default field length.
#[uniffi::export]
pub fn sanitize(value: String, max_length: u32) -> String {
    let max_length = match max_length {
        0 => DEFAULT_MAX_LENGTH,
        n => n as usize,
    };
    qrphone_core::sanitize(&value, max_length)
}

// === Main Interface ===

/// Main QR Phone interface for mobile platforms.
#[derive(uniffi::Object)]
pub struct QrPhoneMobile {
    app: Mutex<QrPhone<PlatformContactBookAdapter>>,
}

impl QrPhoneMobile {
    fn build(
        secret_store: Box<dyn PlatformSecretStore>,
        contact_book: Box<dyn PlatformContactBook>,
        config: QrPhoneConfig,
    ) -> Result<Arc<Self>, MobileError> {
        let app = QrPhoneBuilder::new()
            .config(config)
            .secret_store(Arc::new(PlatformSecretStoreAdapter::new(Arc::from(
                secret_store,
            ))))
            .contact_sink(PlatformContactBookAdapter::new(Arc::from(contact_book)))
            .build()?;

        Ok(Arc::new(QrPhoneMobile {
            app: Mutex::new(app),
        }))
    }
}

#[uniffi::export]
impl QrPhoneMobile {
    /// Create an instance over the platform keychain and address book.
    ///
    /// Loads the saved profile, if any.
    #[uniffi::constructor]
    pub fn new(
        secret_store: Box<dyn PlatformSecretStore>,
        contact_book: Box<dyn PlatformContactBook>,
    ) -> Result<Arc<Self>, MobileError> {
        Self::build(secret_store, contact_book, QrPhoneConfig::default())
    }

    /// Like [`new`](Self::new), with the keychain entries under `key_namespace`.
    #[uniffi::constructor]
    pub fn new_with_namespace(
        secret_store: Box<dyn PlatformSecretStore>,
        contact_book: Box<dyn PlatformContactBook>,
        key_namespace: String,
    ) -> Result<Arc<Self>, MobileError> {
        if key_namespace.trim().is_empty() {
            return Err(MobileError::ConfigurationError(
                "key namespace cannot be empty".into(),
            ));
        }
        let config = QrPhoneConfig::default().with_key_namespace(key_namespace);
        Self::build(secret_store, contact_book, config)
    }

    // === Profile ===

    pub fn has_saved_profile(&self) -> bool {
        self.app.lock().profile().has_saved_profile()
    }

    /// The current profile. All fields are empty when nothing is saved.
    pub fn get_profile(&self) -> MobileProfile {
        self.app.lock().profile().profile().into()
    }

    /// Validate and save the profile.
    ///
    /// A keychain failure does not fail the save; the profile is kept for
    /// the session.
    pub fn save_profile(&self, profile: MobileProfile) -> Result<MobileProfile, MobileError> {
        let mut app = self.app.lock();
        let saved = app.profile_mut().save(&ProfileForm::from(profile))?;
        Ok(saved.into())
    }

    pub fn delete_profile(&self) {
        self.app.lock().profile_mut().delete();
    }

    /// The QR payload of the saved profile, or None when nothing is saved.
    pub fn get_payload(&self) -> Option<String> {
        self.app.lock().profile().payload()
    }

    /// The saved profile's QR code as an SVG document.
    ///
    /// `min_size` is in pixels; 0 uses a default.
    pub fn get_qr_svg(&self, min_size: u32) -> Result<Option<String>, MobileError> {
        let size = if min_size == 0 {
            DEFAULT_QR_SIZE
        } else {
            min_size
        };
        let Some(payload) = self.get_payload() else {
            return Ok(None);
        };
        Ok(Some(qrphone_core::payload::qr::render_svg(&payload, size)?))
    }

    // === Scan ===

    /// Hand one decoded QR string to the scan flow.
    ///
    /// Call for every string the camera detects; repeats are ignored until
    /// [`reset_scan`](Self::reset_scan).
    pub fn handle_scan(&self, raw: String) -> MobileScanOutcome {
        self.app.lock().scan_mut().handle_scan(&raw).into()
    }

    /// Add the scanned contact to the address book.
    ///
    /// Only a `Ready` outcome can be imported; a duplicate never is.
    pub fn confirm_import(&self) -> Result<MobileProfile, MobileError> {
        let imported = self.app.lock().scan_mut().confirm_import()?;
        Ok((&imported).into())
    }

    /// Dismiss the current scan result and accept the next code.
    pub fn reset_scan(&self) {
        self.app.lock().scan_mut().reset();
    }

    pub fn is_scan_latched(&self) -> bool {
        self.app.lock().scan().is_latched()
    }
}
