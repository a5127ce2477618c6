// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! QR Phone API Layer
//!
//! High-level API over the profile store, payload codec and contact book.
//!
//! # Overview
//!
//! The API layer coordinates:
//! - Saving the user's profile and producing its QR payload
//! - Scanning another user's code and importing it
//! - Event handling
//!
//! # Example
//!
//! ```ignore
//! use qrphone_core::api::QrPhone;
//! use qrphone_core::profile::ProfileForm;
//!
//! let mut app = QrPhone::in_memory();
//! app.profile_mut().save(&ProfileForm::new("Ana", "Gómez", "600111222"))?;
//!
//! let outcome = app.scan_mut().handle_scan("Luis\nPérez\n600222333\n");
//! if outcome.profile().is_some() {
//!     app.scan_mut().confirm_import()?;
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the API layer
//! - [`config`] - Configuration types
//! - [`events`] - Event system for callbacks
//! - [`profile_controller`] - Save flow
//! - [`scan`] - Scan session and scan flow
//! - [`qrphone`] - Main QrPhone orchestrator

pub mod config;
pub mod error;
pub mod events;
pub mod profile_controller;
pub mod qrphone;
pub mod scan;

// Error types
pub use error::{QrPhoneError, QrPhoneResult, ScanError};

// Configuration
pub use config::{QrPhoneConfig, DEFAULT_KEYRING_SERVICE};

// Events
pub use events::{CallbackHandler, EventDispatcher, EventHandler, QrPhoneEvent};

// Controllers
pub use profile_controller::ProfileController;
pub use scan::{ScanController, ScanOutcome, ScanSender, ScanSession};

// QrPhone
pub use qrphone::{QrPhone, QrPhoneBuilder};
