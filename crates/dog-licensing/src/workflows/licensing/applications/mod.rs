//! Dog license application intake: the three-step wizard state machine,
//! field validation, the fee schedule, and the storage-backed application
//! ledger shared with the tracking surface.

pub mod domain;
pub(crate) mod fees;
pub mod router;
pub mod store;
pub(crate) mod validation;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationDraft, ApplicationId, ApplicationStatus, DogGender, LicenseApplication,
    SpayNeuterStatus, WizardStep,
};
pub use fees::{display_usd, FeeSchedule};
pub use router::license_router;
pub use store::{
    ApplicationLedger, DraftRecovery, Notice, NoticeLevel, Notifier, StateStore, StatusView,
    StoreError, SubmissionReceipt, APPLICATIONS_KEY, DRAFT_KEY,
};
pub use validation::{validate_step, DraftField, FieldIssue, StepReport, ValidationFailure};
pub use wizard::{submit_draft, LicenseWizard, ReviewSummary, SubmitError};
