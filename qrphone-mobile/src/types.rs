//! Mobile-friendly data types.
//!
//! These types are wrappers around qrphone-core types that are compatible
//! with UniFFI for cross-language bindings.

use qrphone_core::{ExistingContact, Profile, ProfileForm, ScanOutcome};

/// Mobile-friendly profile.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileProfile {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl From<&Profile> for MobileProfile {
    fn from(profile: &Profile) -> Self {
        MobileProfile {
            first_name: profile.first_name().to_string(),
            last_name: profile.last_name().to_string(),
            phone_number: profile.phone_number().to_string(),
            email: profile.email().map(str::to_string),
        }
    }
}

impl From<MobileProfile> for ProfileForm {
    fn from(profile: MobileProfile) -> Self {
        ProfileForm {
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone_number: profile.phone_number,
            email: profile.email,
        }
    }
}

/// A contact already in the platform address book.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileExistingContact {
    pub given_name: String,
    pub family_name: String,
}

impl From<&ExistingContact> for MobileExistingContact {
    fn from(contact: &ExistingContact) -> Self {
        MobileExistingContact {
            given_name: contact.given_name.clone(),
            family_name: contact.family_name.clone(),
        }
    }
}

impl From<MobileExistingContact> for ExistingContact {
    fn from(contact: MobileExistingContact) -> Self {
        ExistingContact::new(contact.given_name, contact.family_name)
    }
}

/// Result of handing a scanned string to the scan flow.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MobileScanOutcome {
    /// Empty input, or a result is already on screen.
    Ignored,
    /// Not a contact code. `message` is safe to show to the user.
    Rejected { message: String },
    /// A new contact, ready to import.
    Ready { profile: MobileProfile },
    /// A contact whose phone number is already in the address book. It
    /// cannot be imported.
    Duplicate {
        profile: MobileProfile,
        existing: Vec<MobileExistingContact>,
    },
}

impl From<ScanOutcome> for MobileScanOutcome {
    fn from(outcome: ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::Ignored => MobileScanOutcome::Ignored,
            ScanOutcome::Rejected(reason) => MobileScanOutcome::Rejected {
                message: reason.user_message().to_string(),
            },
            ScanOutcome::Ready(profile) => MobileScanOutcome::Ready {
                profile: (&profile).into(),
            },
            ScanOutcome::Duplicate { profile, existing } => MobileScanOutcome::Duplicate {
                profile: (&profile).into(),
                existing: existing.iter().map(MobileExistingContact::from).collect(),
            },
        }
    }
}
