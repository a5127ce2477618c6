// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks for QR Phone events. Events describe what happened, never the
//! profile or payload content involved.

use std::sync::Arc;

/// Events emitted by the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrPhoneEvent {
    /// The user's profile was validated and stored.
    ProfileSaved,

    /// The user's profile was deleted.
    ProfileDeleted,

    /// Writing to the secret store failed; the in-memory profile is unaffected.
    PersistenceFailed {
        /// "save" or "delete".
        operation: &'static str,
    },

    /// A scanned code was not a valid contact.
    ScanRejected {
        /// Payload-free reason label.
        category: &'static str,
    },

    /// A scanned contact is ready to import.
    ContactOffered,

    /// The scanned phone number is already in the contact book.
    DuplicateFound {
        /// Number of matching contacts.
        count: usize,
    },

    /// A scanned contact was written to the contact book.
    ContactImported,
}

/// Event handler trait.
///
/// Implement this trait to receive QR Phone events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: QrPhoneEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(QrPhoneEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(QrPhoneEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(QrPhoneEvent) + Send + Sync,
{
    fn on_event(&self, event: QrPhoneEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: QrPhoneEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
