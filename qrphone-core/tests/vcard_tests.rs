// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for contact::vcard (vCard 4.0 export/import)

use qrphone_core::contact::vcard::{export_vcard, import_vcard, VCardError};
use qrphone_core::ProfileForm;

#[test]
fn test_export_full_profile() {
    let profile = ProfileForm::new("Ana", "Gómez", "+34 600111222")
        .with_email("ana@example.com")
        .validate()
        .unwrap();

    let vcard = export_vcard(&profile);
    assert!(vcard.starts_with("BEGIN:VCARD"));
    assert!(vcard.contains("VERSION:4.0"));
    assert!(vcard.contains("FN:Ana Gómez"));
    assert!(vcard.contains("N:Gómez;Ana;;;"));
    assert!(vcard.contains("TEL;TYPE=cell:+34 600111222"));
    assert!(vcard.contains("EMAIL:ana@example.com"));
    assert!(vcard.ends_with("END:VCARD"));
}

#[test]
fn test_export_without_email_has_no_email_line() {
    let profile = ProfileForm::new("Luis", "Pérez", "600222333")
        .validate()
        .unwrap();
    assert!(!export_vcard(&profile).contains("EMAIL"));
}

#[test]
fn test_export_escapes_special_characters() {
    let profile = ProfileForm::new("Ana; María", "O,Brien", "600111222")
        .validate()
        .unwrap();

    let vcard = export_vcard(&profile);
    assert!(vcard.contains(r"N:O\,Brien;Ana\; María;;;"));

    let contact = import_vcard(&vcard).unwrap();
    assert_eq!(contact.given_name, "Ana; María");
    assert_eq!(contact.family_name, "O,Brien");
}

#[test]
fn test_export_import_preserves_fields() {
    let profile = ProfileForm::new("Ana", "Gómez", "+34 600111222")
        .with_email("ana@example.com")
        .validate()
        .unwrap();

    let contact = import_vcard(&export_vcard(&profile)).unwrap();

    assert_eq!(contact.given_name, "Ana");
    assert_eq!(contact.family_name, "Gómez");
    assert_eq!(contact.phone_numbers, vec!["+34 600111222".to_string()]);
    assert_eq!(contact.email.as_deref(), Some("ana@example.com"));
}

#[test]
fn test_import_multiple_phones() {
    let vcard = "BEGIN:VCARD\nVERSION:4.0\nFN:Luis Pérez\nN:Pérez;Luis;;;\nTEL;TYPE=home:600222333\nTEL:+34 911 000 000\nEND:VCARD";
    let contact = import_vcard(vcard).unwrap();
    assert_eq!(contact.phone_numbers, vec!["600222333", "+34 911 000 000"]);
    assert_eq!(contact.email, None);
}

#[test]
fn test_import_invalid_vcard() {
    assert!(matches!(
        import_vcard("not a vcard"),
        Err(VCardError::InvalidFormat(_))
    ));
    assert!(matches!(import_vcard(""), Err(VCardError::InvalidFormat(_))));
}

#[test]
fn test_import_without_name() {
    assert!(matches!(
        import_vcard("BEGIN:VCARD\nVERSION:4.0\nTEL:600111222\nEND:VCARD"),
        Err(VCardError::MissingField(_))
    ));
}
