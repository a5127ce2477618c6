// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.
//! Import these in property test files to avoid duplication.

use proptest::prelude::*;

use qrphone_core::{Profile, ProfileForm};

// ============================================================
// String Strategies
// ============================================================

/// Strategy for generating names, including accented letters and inner spaces.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-zÁÉÍÓÚáéíóúÑñÜü][A-Za-zÁÉÍÓÚáéíóúÑñÜü' -]{0,39}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Strategy for generating email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._%+-]{1,10}", "[a-z0-9-]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating phone numbers using every accepted character.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "\\+?[0-9][0-9 ()-]{5,18}".prop_map(|s| s.trim().to_string())
}

/// Strategy for strings that contain at least one character a phone number
/// may not use.
pub fn bad_phone_strategy() -> impl Strategy<Value = String> {
    ("[0-9]{0,5}", "[a-zA-Z#*.,/_]", "[0-9]{0,5}").prop_map(|(a, bad, b)| format!("{a}{bad}{b}"))
}

/// Strategy for arbitrary text, including whitespace and multi-byte characters.
pub fn any_text_strategy() -> impl Strategy<Value = String> {
    "(\\PC|[ \\t\\n\\r\u{00A0}\u{3000}]){0,200}"
}

// ============================================================
// Profile Strategies
// ============================================================

/// Strategy for generating complete, valid profiles.
pub fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        name_strategy(),
        name_strategy(),
        phone_strategy(),
        prop::option::of(email_strategy()),
    )
        .prop_filter_map("valid profile", |(first, last, phone, email)| {
            let mut form = ProfileForm::new(first, last, phone);
            form.email = email;
            form.validate().ok()
        })
}
