// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Code Rendering
//!
//! Turns a payload string into a QR symbol for display.

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};

use super::QrError;

/// Error correction level used for contact codes.
///
/// Medium keeps the symbol small enough for a phone screen at the 500
/// character payload ceiling.
const EC_LEVEL: EcLevel = EcLevel::M;

fn build(payload: &str) -> Result<QrCode, QrError> {
    Ok(QrCode::with_error_correction_level(
        payload.as_bytes(),
        EC_LEVEL,
    )?)
}

/// Renders the payload as a block-character QR code for terminals.
pub fn render_terminal(payload: &str) -> Result<String, QrError> {
    let code = build(payload)?;

    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

/// Renders the payload as an SVG document at least `min_size` pixels wide.
pub fn render_svg(payload: &str, min_size: u32) -> Result<String, QrError> {
    let code = build(payload)?;

    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(min_size, min_size)
        .quiet_zone(true)
        .build())
}

/// Number of modules per side of the symbol for `payload`.
pub fn symbol_width(payload: &str) -> Result<usize, QrError> {
    Ok(build(payload)?.width())
}
