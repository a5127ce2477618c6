// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Payload Codec
//!
//! The text embedded in a contact QR code:
//!
//! ```text
//! first_name \n last_name \n phone_number \n email
//! ```
//!
//! The email line is empty when the profile has no email. There is no
//! version marker and no escaping; codes printed by any release must keep
//! decoding, so this format is frozen.

mod error;
pub mod qr;

pub use error::{QrError, RejectionReason, INVALID_QR_MESSAGE};

use crate::profile::{
    is_valid_email, is_valid_phone, sanitize, Profile, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH,
    MAX_PHONE_LENGTH,
};

/// Largest payload, in characters, that [`decode`] will look at.
pub const MAX_PAYLOAD_CHARS: usize = 500;

/// Field separator.
const SEPARATOR: char = '\n';

/// Minimum number of fields (first name, last name, phone).
const MIN_FIELDS: usize = 3;

/// Encodes a profile into its QR payload.
pub fn encode(profile: &Profile) -> String {
    format!(
        "{first}{sep}{last}{sep}{phone}{sep}{email}",
        first = profile.first_name(),
        last = profile.last_name(),
        phone = profile.phone_number(),
        email = profile.email().unwrap_or(""),
        sep = SEPARATOR,
    )
}

/// Decodes and validates a scanned payload.
///
/// Every field goes through the same sanitize/validate rules as the save
/// path. Fields after the fourth are ignored.
pub fn decode(raw: &str) -> Result<Profile, RejectionReason> {
    if raw.chars().nth(MAX_PAYLOAD_CHARS).is_some() {
        return Err(RejectionReason::PayloadTooLong);
    }

    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(RejectionReason::TooFewFields);
    }

    let first_name = sanitize(fields[0], MAX_NAME_LENGTH);
    let last_name = sanitize(fields[1], MAX_NAME_LENGTH);
    let phone_number = sanitize(fields[2], MAX_PHONE_LENGTH);

    if first_name.is_empty() || last_name.is_empty() {
        return Err(RejectionReason::EmptyRequiredField);
    }

    if !is_valid_phone(&phone_number) {
        return Err(RejectionReason::InvalidPhone);
    }

    let email = match fields.get(3).map(|raw| sanitize(raw, MAX_EMAIL_LENGTH)) {
        Some(email) if !email.is_empty() => {
            if !is_valid_email(&email) {
                return Err(RejectionReason::InvalidEmail);
            }
            Some(email)
        }
        _ => None,
    };

    Ok(Profile::from_validated(
        first_name,
        last_name,
        phone_number,
        email,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileForm;

    #[test]
    fn test_encode_without_email_keeps_trailing_separator() {
        let profile = ProfileForm::new("Ana", "Gómez", "600111222")
            .validate()
            .unwrap();
        assert_eq!(encode(&profile), "Ana\nGómez\n600111222\n");
    }

    #[test]
    fn test_decode_three_fields_has_no_email() {
        let profile = decode("Ana\nGómez\n600111222").unwrap();
        assert_eq!(profile.email(), None);
    }

    #[test]
    fn test_decode_length_guard_counts_characters() {
        // 500 two-byte characters is within the limit even though it is 1000 bytes.
        let name = "ñ".repeat(240);
        let raw = format!("{name}\n{name}\n600111222\n\n{}", "x".repeat(7));
        assert_eq!(raw.chars().count(), 500);
        assert!(decode(&raw).is_ok());

        let raw = format!("{raw}x");
        assert_eq!(decode(&raw), Err(RejectionReason::PayloadTooLong));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let profile = decode("Ana\nGómez\n600111222\nana@example.com\nextra\nmore").unwrap();
        assert_eq!(profile.email(), Some("ana@example.com"));
    }

    #[test]
    fn test_decode_tolerates_crlf_line_endings() {
        let profile = decode("Ana\r\nGómez\r\n600111222\r\nana@example.com").unwrap();
        assert_eq!(profile.first_name(), "Ana");
        assert_eq!(profile.email(), Some("ana@example.com"));
    }

    #[test]
    fn test_decode_empty_last_name() {
        assert_eq!(
            decode("Ana\n   \n600111222"),
            Err(RejectionReason::EmptyRequiredField)
        );
    }

    #[test]
    fn test_decode_empty_phone_is_invalid_phone() {
        assert_eq!(decode("Ana\nGómez\n"), Err(RejectionReason::InvalidPhone));
    }
}
