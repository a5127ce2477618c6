// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the scan flow (api::scan)

mod common;

use std::sync::Arc;

use common::helpers::{recording_handler, BrokenContactSink};
use qrphone_core::api::{
    EventDispatcher, QrPhoneBuilder, QrPhoneEvent, ScanController, ScanError, ScanOutcome,
    ScanSession,
};
use qrphone_core::contact::{ExistingContact, MemoryContactSink, SinkError};
use qrphone_core::storage::MemorySecretStore;
use qrphone_core::{Profile, ProfileForm, RejectionReason};

const ANA: &str = "Ana\nGómez\n+34 600111222\nana@example.com";
const LUIS: &str = "Luis\nPérez\n600222333\n";

fn existing(first: &str, last: &str, phone: &str) -> Profile {
    ProfileForm::new(first, last, phone).validate().unwrap()
}

fn controller(sink: MemoryContactSink) -> ScanController<MemoryContactSink> {
    ScanController::new(sink, Arc::new(EventDispatcher::new()))
}

#[test]
fn test_valid_scan_is_ready() {
    let mut ctrl = controller(MemoryContactSink::new());

    let outcome = ctrl.handle_scan(ANA);

    let ScanOutcome::Ready(profile) = &outcome else {
        panic!("expected Ready, got {outcome:?}");
    };
    assert_eq!(profile.full_name(), "Ana Gómez");
    assert_eq!(profile.email(), Some("ana@example.com"));
    assert_eq!(ctrl.pending(), Some(profile));
}

#[test]
fn test_known_phone_is_duplicate() {
    let sink = MemoryContactSink::with_contacts(vec![existing("Ana", "G.", "+34600111222")]);
    let mut ctrl = controller(sink);

    match ctrl.handle_scan(ANA) {
        ScanOutcome::Duplicate { profile, existing } => {
            assert_eq!(profile.first_name(), "Ana");
            assert_eq!(existing, vec![ExistingContact::new("Ana", "G.")]);
        }
        other => panic!("expected Duplicate, got {other:?}"),
    }

    // Never offered for a contact-book write.
    assert!(ctrl.pending().is_none());
    assert_eq!(ctrl.confirm_import(), Err(ScanError::NothingPending));
    assert_eq!(ctrl.sink().len(), 1);
}

#[test]
fn test_scans_ignored_until_reset() {
    let mut ctrl = controller(MemoryContactSink::new());

    assert!(matches!(ctrl.handle_scan(ANA), ScanOutcome::Ready(_)));
    assert_eq!(ctrl.handle_scan(LUIS), ScanOutcome::Ignored);
    assert_eq!(ctrl.handle_scan(ANA), ScanOutcome::Ignored);
    assert_eq!(ctrl.pending().unwrap().first_name(), "Ana");

    ctrl.reset();
    assert!(ctrl.pending().is_none());

    let outcome = ctrl.handle_scan(LUIS);
    assert_eq!(outcome.profile().unwrap().first_name(), "Luis");
}

#[test]
fn test_rejected_scan_also_latches() {
    let mut ctrl = controller(MemoryContactSink::new());

    assert_eq!(
        ctrl.handle_scan("Luis\nPerez\nABC123"),
        ScanOutcome::Rejected(RejectionReason::InvalidPhone)
    );
    assert_eq!(ctrl.handle_scan(ANA), ScanOutcome::Ignored);

    ctrl.reset();
    assert!(matches!(ctrl.handle_scan(ANA), ScanOutcome::Ready(_)));
}

#[test]
fn test_poll_returns_first_result_and_drains() {
    let (sender, session) = ScanSession::open();
    let mut ctrl = controller(MemoryContactSink::new());

    assert_eq!(ctrl.poll(&session), None);

    sender.send("");
    sender.send(LUIS);
    sender.send(ANA);

    let outcome = ctrl.poll(&session).unwrap();
    assert_eq!(outcome.profile().unwrap().first_name(), "Luis");
    assert_eq!(session.try_next(), None);
}

#[test]
fn test_lookup_failure_is_not_fatal() {
    let mut ctrl = ScanController::new(BrokenContactSink, Arc::new(EventDispatcher::new()));

    assert!(matches!(ctrl.handle_scan(ANA), ScanOutcome::Ready(_)));

    assert_eq!(
        ctrl.confirm_import(),
        Err(ScanError::Sink(SinkError::WriteFailed("read-only".into())))
    );
    // Still pending so the user can retry.
    assert!(ctrl.pending().is_some());
}

#[test]
fn test_confirm_without_scan() {
    let mut ctrl = controller(MemoryContactSink::new());
    assert_eq!(ctrl.confirm_import(), Err(ScanError::NothingPending));
}

#[test]
fn test_events_never_carry_payload() {
    let (handler, events) = recording_handler();
    let mut app = QrPhoneBuilder::new()
        .secret_store(Arc::new(MemorySecretStore::new()))
        .contact_sink(MemoryContactSink::with_contacts(vec![existing(
            "Luis", "Pérez", "600222333",
        )]))
        .event_handler(handler)
        .build()
        .unwrap();

    app.scan_mut().handle_scan("Ana\nGómez\nnot a phone");
    app.scan_mut().reset();
    app.scan_mut().handle_scan(LUIS);
    app.scan_mut().reset();
    app.scan_mut().handle_scan(ANA);
    app.scan_mut().confirm_import().unwrap();

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            QrPhoneEvent::ScanRejected {
                category: "invalid_phone"
            },
            QrPhoneEvent::DuplicateFound { count: 1 },
            QrPhoneEvent::ContactOffered,
            QrPhoneEvent::ContactImported,
        ]
    );

    let rendered = format!("{:?}", *events);
    for secret in ["Ana", "Gómez", "Luis", "600", "example.com"] {
        assert!(!rendered.contains(secret));
    }
}
