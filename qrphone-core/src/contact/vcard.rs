// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard 4.0 Export/Import (RFC 6350)

use crate::profile::Profile;

/// The parts of a vCard needed to recognize an existing contact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VCardContact {
    pub given_name: String,
    pub family_name: String,
    pub phone_numbers: Vec<String>,
    pub email: Option<String>,
}

/// Exports a Profile to vCard 4.0 format.
pub fn export_vcard(profile: &Profile) -> String {
    let mut lines = Vec::new();
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:4.0".to_string());
    lines.push(format!("FN:{}", escape_vcard(&profile.full_name())));
    lines.push(format!(
        "N:{};{};;;",
        escape_vcard(profile.last_name()),
        escape_vcard(profile.first_name())
    ));
    lines.push(format!(
        "TEL;TYPE=cell:{}",
        escape_vcard(profile.phone_number())
    ));
    if let Some(email) = profile.email() {
        lines.push(format!("EMAIL:{}", escape_vcard(email)));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\r\n")
}

/// Imports a vCard string.
///
/// Names come from `N`, falling back to splitting `FN` at the first space.
pub fn import_vcard(vcard: &str) -> Result<VCardContact, VCardError> {
    let lines: Vec<&str> = vcard.lines().collect();

    if lines.is_empty() || !lines[0].trim().eq_ignore_ascii_case("BEGIN:VCARD") {
        return Err(VCardError::InvalidFormat("Missing BEGIN:VCARD".into()));
    }

    let mut display_name = String::new();
    let mut contact = VCardContact::default();

    for line in &lines {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("FN:") {
            display_name = unescape_vcard(value);
        } else if let Some(value) = line.strip_prefix("N:") {
            let parts = split_structured(value);
            contact.family_name = parts.first().cloned().unwrap_or_default();
            contact.given_name = parts.get(1).cloned().unwrap_or_default();
        } else if line.starts_with("TEL") {
            contact.phone_numbers.push(field_value(line, "TEL"));
        } else if line.starts_with("EMAIL") && contact.email.is_none() {
            contact.email = Some(field_value(line, "EMAIL")).filter(|e| !e.is_empty());
        }
    }

    if contact.given_name.is_empty() && contact.family_name.is_empty() {
        if display_name.is_empty() {
            return Err(VCardError::MissingField("FN (display name)".into()));
        }
        let (given, family) = display_name
            .split_once(' ')
            .unwrap_or((display_name.as_str(), ""));
        contact.given_name = given.to_string();
        contact.family_name = family.to_string();
    }

    Ok(contact)
}

fn field_value(line: &str, prefix: &str) -> String {
    // Format: PREFIX;PARAMS:value or PREFIX:value
    let after_prefix = &line[prefix.len()..];
    match after_prefix.find(':') {
        Some(colon_pos) => unescape_vcard(&after_prefix[colon_pos + 1..]),
        None => unescape_vcard(after_prefix),
    }
}

/// Splits a structured value on unescaped `;`.
fn split_structured(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ';' => parts.push(unescape_vcard(&std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    parts.push(unescape_vcard(&current));
    parts
}

fn escape_vcard(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

fn unescape_vcard(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// vCard parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum VCardError {
    #[error("Invalid vCard format: {0}")]
    InvalidFormat(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
}
