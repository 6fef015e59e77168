use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::common::*;
use crate::workflows::licensing::applications::domain::ApplicationId;
use crate::workflows::licensing::applications::store::{ApplicationLedger, DraftRecovery};
use crate::workflows::licensing::applications::validation::record_from_draft;
use crate::workflows::licensing::applications::{APPLICATIONS_KEY, DRAFT_KEY};

fn sample_application(id: &str) -> crate::workflows::licensing::applications::LicenseApplication {
    record_from_draft(
        complete_draft(),
        ApplicationId(id.to_string()),
        Utc::now(),
    )
    .expect("complete draft converts")
}

#[test]
fn recover_draft_reports_absent_when_nothing_saved() {
    let store = Arc::new(MemoryStore::default());
    match ledger(store).recover_draft() {
        DraftRecovery::Absent => {}
        other => panic!("expected absent draft, got {other:?}"),
    }
}

#[test]
fn recover_draft_restores_saved_values() {
    let store = Arc::new(MemoryStore::default());
    seed_draft(&store, &complete_draft());

    match ledger(store).recover_draft() {
        DraftRecovery::Restored(draft) => assert_eq!(draft, complete_draft()),
        other => panic!("expected restored draft, got {other:?}"),
    }
}

#[test]
fn recover_draft_degrades_on_garbage_without_failing() {
    let store = Arc::new(MemoryStore::default());
    store.seed(DRAFT_KEY, "{not json");

    match ledger(store).recover_draft() {
        DraftRecovery::Unreadable => {}
        other => panic!("expected unreadable draft, got {other:?}"),
    }
}

#[test]
fn recover_draft_degrades_when_the_store_errors() {
    let ledger = ApplicationLedger::new(Arc::new(UnavailableStore));
    match ledger.recover_draft() {
        DraftRecovery::Unreadable => {}
        other => panic!("expected unreadable draft, got {other:?}"),
    }
}

#[test]
fn save_draft_writes_the_camel_case_layout() {
    let store = Arc::new(MemoryStore::default());
    ledger(store.clone())
        .save_draft(&complete_draft())
        .expect("draft saves");

    let raw = store.raw(DRAFT_KEY).expect("draft key written");
    let value: Value = serde_json::from_str(&raw).expect("draft is json");
    assert_eq!(value["ownerName"], "Jane Doe");
    assert_eq!(value["spayedNeutered"], "No");
    assert_eq!(value["rabiesVaccination"], "2024-01-01");
}

#[test]
fn applications_default_to_empty_on_absent_or_corrupt_collections() {
    let store = Arc::new(MemoryStore::default());
    assert!(ledger(store.clone()).applications().expect("reads").is_empty());

    store.seed(APPLICATIONS_KEY, "][");
    assert!(ledger(store).applications().expect("reads").is_empty());
}

#[test]
fn applications_surface_store_failures() {
    let ledger = ApplicationLedger::new(Arc::new(UnavailableStore));
    ledger
        .applications()
        .expect_err("store failure should propagate");
}

#[test]
fn append_preserves_existing_entries_in_order() {
    let store = Arc::new(MemoryStore::default());
    let ledger = ledger(store.clone());

    ledger
        .append(&sample_application("FC-DOG-1-AAAAAAAAA"))
        .expect("first append");
    ledger
        .append(&sample_application("FC-DOG-2-BBBBBBBBB"))
        .expect("second append");

    let stored = ledger.applications().expect("collection reads");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id.0, "FC-DOG-1-AAAAAAAAA");
    assert_eq!(stored[1].id.0, "FC-DOG-2-BBBBBBBBB");
}

#[test]
fn find_returns_the_matching_record() {
    let store = Arc::new(MemoryStore::default());
    let ledger = ledger(store);
    ledger
        .append(&sample_application("FC-DOG-1-AAAAAAAAA"))
        .expect("append");

    let found = ledger
        .find(&ApplicationId("FC-DOG-1-AAAAAAAAA".to_string()))
        .expect("lookup succeeds")
        .expect("record present");
    assert_eq!(found.title, "Dog License for Rex");

    let missing = ledger
        .find(&ApplicationId("FC-DOG-0-MISSING00".to_string()))
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[test]
fn status_view_exposes_the_tracking_fields() {
    let application = sample_application("FC-DOG-1-AAAAAAAAA");
    let view = application.status_view();

    assert_eq!(view.application_id.0, "FC-DOG-1-AAAAAAAAA");
    assert_eq!(view.status, "pending");
    assert_eq!(view.title, "Dog License for Rex");
}
