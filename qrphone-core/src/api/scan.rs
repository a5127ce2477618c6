// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan Flow
//!
//! A scanner pushes raw strings into a [`ScanSession`]; the
//! [`ScanController`] decodes the first one, checks the contact book for
//! duplicates, and holds a new contact until the user imports or dismisses
//! it.
//! Later scans are ignored until [`ScanController::reset`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::contact::{ContactSink, ExistingContact};
use crate::payload::{self, RejectionReason};
use crate::profile::Profile;

use super::error::ScanError;
use super::events::{EventDispatcher, QrPhoneEvent};

/// Producer half of a scan session, held by the scanner.
///
/// Not `Clone`: a session has exactly one scanner.
pub struct ScanSender {
    tx: Sender<String>,
}

impl ScanSender {
    /// Delivers one decoded QR string. Returns false once the session is gone.
    pub fn send(&self, raw: impl Into<String>) -> bool {
        self.tx.send(raw.into()).is_ok()
    }
}

/// Consumer half of a scan session.
pub struct ScanSession {
    rx: Receiver<String>,
}

impl ScanSession {
    /// Opens a session and returns the scanner's sender with it.
    pub fn open() -> (ScanSender, ScanSession) {
        let (tx, rx) = mpsc::channel();
        (ScanSender { tx }, ScanSession { rx })
    }

    /// Next queued string, without blocking.
    pub fn try_next(&self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(raw) => Some(raw),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks for the next string. None once the sender is dropped and the
    /// queue is empty.
    pub fn recv(&self) -> Option<String> {
        self.rx.recv().ok()
    }
}

/// Result of handling one scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Empty input, or a result is already being shown.
    Ignored,

    /// The code is not a valid contact.
    Rejected(RejectionReason),

    /// A valid contact, not yet in the contact book.
    Ready(Profile),

    /// A valid contact whose phone number is already in the contact book.
    /// It is not offered for import.
    Duplicate {
        profile: Profile,
        existing: Vec<ExistingContact>,
    },
}

impl ScanOutcome {
    /// The scanned profile, for `Ready` and `Duplicate`.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ScanOutcome::Ready(profile) | ScanOutcome::Duplicate { profile, .. } => Some(profile),
            ScanOutcome::Ignored | ScanOutcome::Rejected(_) => None,
        }
    }
}

/// Drives the scan flow against a contact book.
pub struct ScanController<K: ContactSink> {
    sink: K,
    events: Arc<EventDispatcher>,
    latched: bool,
    pending: Option<Profile>,
}

impl<K: ContactSink> ScanController<K> {
    pub fn new(sink: K, events: Arc<EventDispatcher>) -> Self {
        ScanController {
            sink,
            events,
            latched: false,
            pending: None,
        }
    }

    /// The contact book.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// The contact waiting for [`confirm_import`](Self::confirm_import).
    pub fn pending(&self) -> Option<&Profile> {
        self.pending.as_ref()
    }

    /// True while a scan result is held.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Handles one scanned string.
    pub fn handle_scan(&mut self, raw: &str) -> ScanOutcome {
        if raw.is_empty() || self.latched {
            return ScanOutcome::Ignored;
        }
        self.latched = true;

        let profile = match payload::decode(raw) {
            Ok(profile) => profile,
            Err(reason) => {
                info!(reason = reason.category(), "rejected scanned code");
                self.events.dispatch(QrPhoneEvent::ScanRejected {
                    category: reason.category(),
                });
                return ScanOutcome::Rejected(reason);
            }
        };

        let existing = match self.sink.find_by_phone(profile.phone_number()) {
            Ok(existing) => existing,
            Err(e) => {
                warn!(error = %e, "duplicate lookup failed, continuing");
                Vec::new()
            }
        };

        if existing.is_empty() {
            self.pending = Some(profile.clone());
            self.events.dispatch(QrPhoneEvent::ContactOffered);
            ScanOutcome::Ready(profile)
        } else {
            debug!(matches = existing.len(), "scanned contact already known");
            self.events.dispatch(QrPhoneEvent::DuplicateFound {
                count: existing.len(),
            });
            ScanOutcome::Duplicate { profile, existing }
        }
    }

    /// Handles everything queued in `session` and returns the first outcome
    /// that was not ignored.
    pub fn poll(&mut self, session: &ScanSession) -> Option<ScanOutcome> {
        let mut first = None;
        while let Some(raw) = session.try_next() {
            let outcome = self.handle_scan(&raw);
            if first.is_none() && outcome != ScanOutcome::Ignored {
                first = Some(outcome);
            }
        }
        first
    }

    /// Writes the pending contact to the contact book.
    ///
    /// Only a [`ScanOutcome::Ready`] contact is pending.
    ///
    /// A failed write keeps the contact pending so it can be retried.
    pub fn confirm_import(&mut self) -> Result<Profile, ScanError> {
        let profile = self.pending.as_ref().ok_or(ScanError::NothingPending)?;

        if let Err(e) = self.sink.save_contact(profile) {
            warn!(error = %e, "failed to import contact");
            return Err(e.into());
        }

        self.events.dispatch(QrPhoneEvent::ContactImported);
        self.pending.take().ok_or(ScanError::NothingPending)
    }

    /// Dismisses the current result and accepts the next scan.
    pub fn reset(&mut self) {
        self.latched = false;
        self.pending = None;
    }
}
