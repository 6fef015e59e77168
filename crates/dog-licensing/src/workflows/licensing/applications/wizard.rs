use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{ApplicationDraft, ApplicationId, LicenseApplication, WizardStep};
use super::fees::{display_usd, FeeSchedule};
use super::store::{ApplicationLedger, DraftRecovery, Notice, Notifier, StateStore, StoreError};
use super::validation::{self, StepReport, ValidationFailure};

const ID_PREFIX: &str = "FC-DOG";
const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mint a submission id: `FC-DOG-<epoch millis>-<9 random base36 uppercase>`.
/// The timestamp plus random suffix makes collisions practically impossible,
/// which is all the uniqueness the single-writer store requires.
pub(crate) fn next_application_id() -> ApplicationId {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    ApplicationId(format!("{ID_PREFIX}-{millis}-{suffix}"))
}

/// Error raised by a submission attempt. Both variants leave the draft in
/// place so the applicant can correct or retry.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Validate, mint, append, and clear the draft as one submission operation.
/// Shared by the wizard controller and the HTTP intake handler. The
/// append-and-write is the commit point: if it fails, no id exists and the
/// saved draft is untouched.
pub fn submit_draft<S: StateStore>(
    ledger: &ApplicationLedger<S>,
    draft: ApplicationDraft,
) -> Result<LicenseApplication, SubmitError> {
    let application = validation::record_from_draft(draft, next_application_id(), Utc::now())?;
    ledger.append(&application)?;
    ledger.clear_draft()?;
    info!(id = %application.id.0, dog = %application.dog_name, "license application recorded");
    Ok(application)
}

/// Step-wizard controller: owns the draft, the current screen, and the
/// submitted-id terminal state, talking to the outside world only through
/// the storage and notification ports.
pub struct LicenseWizard<S, N> {
    ledger: ApplicationLedger<S>,
    notifier: Arc<N>,
    fees: FeeSchedule,
    step: WizardStep,
    draft: ApplicationDraft,
    submitted: Option<ApplicationId>,
}

impl<S, N> LicenseWizard<S, N>
where
    S: StateStore,
    N: Notifier,
{
    /// Mount the wizard: recover any saved draft, notifying the applicant
    /// only when one was actually restored. Absent and unreadable saves both
    /// start empty; the unreadable case is logged and otherwise suppressed.
    pub fn mount(store: Arc<S>, notifier: Arc<N>, fees: FeeSchedule) -> Self {
        let ledger = ApplicationLedger::new(store);
        let draft = match ledger.recover_draft() {
            DraftRecovery::Restored(saved) => {
                notifier.notify(Notice::info("Draft application loaded"));
                saved
            }
            DraftRecovery::Absent => ApplicationDraft::default(),
            DraftRecovery::Unreadable => {
                warn!("saved draft could not be read; starting from an empty application");
                ApplicationDraft::default()
            }
        };

        Self {
            ledger,
            notifier,
            fees,
            step: WizardStep::first(),
            draft,
            submitted: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Id of the submitted application once the terminal state is reached.
    pub fn submitted_id(&self) -> Option<&ApplicationId> {
        self.submitted.as_ref()
    }

    /// Apply a field change and autosave the whole draft. Autosave is
    /// best-effort: a write failure is logged, never surfaced.
    pub fn edit(&mut self, change: impl FnOnce(&mut ApplicationDraft)) {
        change(&mut self.draft);
        if let Err(err) = self.ledger.save_draft(&self.draft) {
            warn!(%err, "draft autosave failed");
        }
    }

    pub fn validate_step(&self, step: WizardStep) -> StepReport {
        validation::validate_step(step, &self.draft)
    }

    /// Move forward one screen when the current screen validates; otherwise
    /// surface a single generic notification and stay. No-op on the review
    /// screen. Returns the resulting current step.
    pub fn advance(&mut self) -> WizardStep {
        let report = self.validate_step(self.step);
        if !report.is_valid() {
            self.notifier
                .notify(Notice::error("Please fill in all required fields correctly"));
            return self.step;
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move back one screen. Backward navigation never validates; entered
    /// data stays in the draft. Returns the resulting current step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.back() {
            self.step = previous;
        }
        self.step
    }

    /// Current fee quote, re-derived from the draft on every call.
    pub fn fee(&self) -> u32 {
        self.fees.quote(self.draft.spayed_neutered)
    }

    /// Snapshot rendered on the review screen.
    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary {
            owner_name: self.draft.owner_name.clone(),
            dog_name: self.draft.dog_name.clone(),
            dog_breed: self.draft.dog_breed.clone(),
            dog_age: self.draft.dog_age,
            spayed_neutered: self
                .draft
                .spayed_neutered
                .map(|status| status.label())
                .unwrap_or("-"),
            fee_display: display_usd(self.fee()),
        }
    }

    /// Submit the current draft. On success the wizard enters its terminal
    /// submitted state with a fresh empty draft and the saved draft removed
    /// from the store. On failure the step and draft are untouched so the
    /// applicant can retry.
    pub fn submit(&mut self) -> Result<ApplicationId, SubmitError> {
        match submit_draft(&self.ledger, self.draft.clone()) {
            Ok(application) => {
                let id = application.id;
                self.submitted = Some(id.clone());
                self.draft = ApplicationDraft::default();
                self.notifier
                    .notify(Notice::success("Application submitted successfully!"));
                Ok(id)
            }
            Err(err) => {
                let message = match &err {
                    SubmitError::Validation(_) => "Please fill in all required fields correctly",
                    SubmitError::Storage(_) => "Failed to submit application. Please try again.",
                };
                self.notifier.notify(Notice::error(message));
                Err(err)
            }
        }
    }
}

/// Read-only summary of the draft as shown on the review screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub owner_name: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_age: u32,
    pub spayed_neutered: &'static str,
    pub fee_display: String,
}
