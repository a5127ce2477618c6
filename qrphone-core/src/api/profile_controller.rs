// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Controller
//!
//! The save flow: validate form input, keep the in-memory profile, persist
//! it, and hand out its payload for display.

use std::sync::Arc;

use tracing::warn;

use crate::payload::{self, qr, QrError};
use crate::profile::{Profile, ProfileForm, ValidationError};
use crate::storage::ProfileStore;

use super::events::{EventDispatcher, QrPhoneEvent};

/// Owns the user's profile for the session.
///
/// The in-memory profile is authoritative: a failed write to the store is
/// reported through events but does not undo a save or delete.
pub struct ProfileController {
    store: ProfileStore,
    profile: Profile,
    has_saved_profile: bool,
    events: Arc<EventDispatcher>,
}

impl ProfileController {
    /// Creates a controller, loading whatever profile is stored.
    pub fn new(store: ProfileStore, events: Arc<EventDispatcher>) -> Self {
        let profile = store.load();
        let has_saved_profile = profile.is_complete();

        ProfileController {
            store,
            profile,
            has_saved_profile,
            events,
        }
    }

    /// The current in-memory profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// True once a complete profile has been saved or loaded.
    pub fn has_saved_profile(&self) -> bool {
        self.has_saved_profile
    }

    /// Validates and saves `form`.
    ///
    /// On a validation error nothing changes and nothing is written.
    pub fn save(&mut self, form: &ProfileForm) -> Result<&Profile, ValidationError> {
        let profile = form.validate()?;

        if let Err(e) = self.store.save(&profile) {
            warn!(error = %e, "failed to persist profile");
            self.events
                .dispatch(QrPhoneEvent::PersistenceFailed { operation: "save" });
        }

        self.profile = profile;
        self.has_saved_profile = true;
        self.events.dispatch(QrPhoneEvent::ProfileSaved);

        Ok(&self.profile)
    }

    /// Clears the profile from memory and from the store.
    pub fn delete(&mut self) {
        self.profile = Profile::empty();
        self.has_saved_profile = false;

        if let Err(e) = self.store.delete() {
            warn!(error = %e, "failed to delete stored profile");
            self.events
                .dispatch(QrPhoneEvent::PersistenceFailed { operation: "delete" });
        }

        self.events.dispatch(QrPhoneEvent::ProfileDeleted);
    }

    /// The QR payload for the saved profile, if there is one.
    pub fn payload(&self) -> Option<String> {
        if self.has_saved_profile && self.profile.is_complete() {
            Some(payload::encode(&self.profile))
        } else {
            None
        }
    }

    /// The saved profile's QR code rendered for a terminal.
    pub fn render_qr(&self) -> Result<Option<String>, QrError> {
        self.payload()
            .map(|payload| qr::render_terminal(&payload))
            .transpose()
    }
}
