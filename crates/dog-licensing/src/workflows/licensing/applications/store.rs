use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{ApplicationDraft, ApplicationId, LicenseApplication};
use super::fees::FeeSchedule;

/// Store key holding the in-progress draft, overwritten on every edit and
/// removed on submit.
pub const DRAFT_KEY: &str = "dog_license_draft";

/// Store key holding the ordered, append-only collection of submitted
/// applications shared with the tracking surface.
pub const APPLICATIONS_KEY: &str = "quantum_applications";

/// Storage port so the wizard can be exercised without a real persistent
/// store. Values are opaque strings; the ledger layer owns the JSON layout.
pub trait StateStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Three-outcome draft recovery. Absent and unreadable drafts both start the
/// wizard empty, but only a restored draft notifies the user.
#[derive(Debug)]
pub enum DraftRecovery {
    Restored(ApplicationDraft),
    Absent,
    Unreadable,
}

/// Typed layer over the storage port: owns the two fixed keys and the JSON
/// encode/decode for everything behind them.
#[derive(Debug, Clone)]
pub struct ApplicationLedger<S> {
    store: Arc<S>,
}

impl<S: StateStore> ApplicationLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Attempt to recover a previously saved draft. Storage failures and
    /// unparsable blobs both degrade to `Unreadable`; neither propagates.
    pub fn recover_draft(&self) -> DraftRecovery {
        match self.store.read(DRAFT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(draft) => DraftRecovery::Restored(draft),
                Err(_) => DraftRecovery::Unreadable,
            },
            Ok(None) => DraftRecovery::Absent,
            Err(_) => DraftRecovery::Unreadable,
        }
    }

    /// Overwrite the saved draft wholesale.
    pub fn save_draft(&self, draft: &ApplicationDraft) -> Result<(), StoreError> {
        let raw = serde_json::to_string(draft)?;
        self.store.write(DRAFT_KEY, &raw)
    }

    pub fn clear_draft(&self) -> Result<(), StoreError> {
        self.store.delete(DRAFT_KEY)
    }

    /// All submitted applications in insertion order. An absent or unparsable
    /// collection reads as empty; only a storage failure is an error.
    pub fn applications(&self) -> Result<Vec<LicenseApplication>, StoreError> {
        let raw = self.store.read(APPLICATIONS_KEY)?;
        Ok(raw
            .and_then(|value| serde_json::from_str(&value).ok())
            .unwrap_or_default())
    }

    /// Append a submitted application, preserving previously stored entries.
    pub fn append(&self, application: &LicenseApplication) -> Result<(), StoreError> {
        let mut applications = self.applications()?;
        applications.push(application.clone());
        let raw = serde_json::to_string(&applications)?;
        self.store.write(APPLICATIONS_KEY, &raw)
    }

    /// Look up a stored application by id for the tracking surface.
    pub fn find(&self, id: &ApplicationId) -> Result<Option<LicenseApplication>, StoreError> {
        Ok(self
            .applications()?
            .into_iter()
            .find(|application| &application.id == id))
    }
}

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub const fn label(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

/// A transient message shown to the applicant (toast-style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Notification port for transient success/error/info messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sanitized status payload served to the tracking surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub title: String,
    pub created_time: DateTime<Utc>,
}

/// Payload returned to the applicant immediately after a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub title: String,
    pub fee_due: u32,
}

impl LicenseApplication {
    pub fn status_view(&self) -> StatusView {
        StatusView {
            application_id: self.id.clone(),
            status: self.status.label(),
            title: self.title.clone(),
            created_time: self.created_time,
        }
    }

    pub fn receipt(&self, fees: &FeeSchedule) -> SubmissionReceipt {
        SubmissionReceipt {
            application_id: self.id.clone(),
            status: self.status.label(),
            title: self.title.clone(),
            fee_due: fees.quote(Some(self.spayed_neutered)),
        }
    }
}
