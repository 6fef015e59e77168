use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::licensing::applications::domain::{
    ApplicationDraft, DogGender, SpayNeuterStatus,
};
use crate::workflows::licensing::applications::store::{
    ApplicationLedger, Notice, Notifier, StateStore, StoreError,
};
use crate::workflows::licensing::applications::wizard::LicenseWizard;
use crate::workflows::licensing::applications::{license_router, FeeSchedule, DRAFT_KEY};

/// Fully valid draft matching the worked submission example.
pub(super) fn complete_draft() -> ApplicationDraft {
    ApplicationDraft {
        owner_name: "Jane Doe".to_string(),
        owner_address: "12 Elm St, Chambersburg, PA".to_string(),
        owner_phone: "7175550123".to_string(),
        dog_name: "Rex".to_string(),
        dog_breed: "Beagle".to_string(),
        dog_age: 4,
        dog_gender: Some(DogGender::Male),
        spayed_neutered: Some(SpayNeuterStatus::No),
        rabies_vaccination: "2024-01-01".to_string(),
    }
}

/// Draft with only the owner screen filled in.
pub(super) fn owner_only_draft() -> ApplicationDraft {
    ApplicationDraft {
        owner_name: "Jane Doe".to_string(),
        owner_address: "12 Elm St, Chambersburg, PA".to_string(),
        owner_phone: "7175550123".to_string(),
        ..ApplicationDraft::default()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub(super) fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    pub(super) fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.seed(key, value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .remove(key);
        Ok(())
    }
}

/// Store whose writes fail while reads and deletes keep working, for the
/// best-effort autosave paths.
#[derive(Default, Clone)]
pub(super) struct WriteFailStore {
    pub(super) inner: MemoryStore,
}

impl StateStore for WriteFailStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.read(key)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write quota exceeded".to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.delete(key)
    }
}

/// Store where every operation fails.
pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("state store offline".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("state store offline".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("state store offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
    }
}

pub(super) fn mount_wizard(
    store: Arc<MemoryStore>,
) -> (
    LicenseWizard<MemoryStore, RecordingNotifier>,
    Arc<RecordingNotifier>,
) {
    let notifier = Arc::new(RecordingNotifier::default());
    let wizard = LicenseWizard::mount(store, notifier.clone(), FeeSchedule::default());
    (wizard, notifier)
}

pub(super) fn ledger(store: Arc<MemoryStore>) -> ApplicationLedger<MemoryStore> {
    ApplicationLedger::new(store)
}

pub(super) fn seed_draft(store: &MemoryStore, draft: &ApplicationDraft) {
    store.seed(
        DRAFT_KEY,
        &serde_json::to_string(draft).expect("draft serializes"),
    );
}

pub(super) fn intake_router(store: Arc<MemoryStore>) -> axum::Router {
    license_router(ApplicationLedger::new(store), FeeSchedule::default())
}

pub(super) fn assert_id_format(id: &str) {
    let rest = id.strip_prefix("FC-DOG-").expect("id carries the FC-DOG prefix");
    let (millis, suffix) = rest.split_once('-').expect("id separates timestamp and suffix");
    assert!(
        !millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()),
        "timestamp segment should be all digits, got {millis}"
    );
    assert_eq!(suffix.chars().count(), 9, "suffix should be 9 characters");
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
        "suffix should be uppercase base36, got {suffix}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
