use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{
    ApplicationDraft, ApplicationId, ApplicationStatus, LicenseApplication, WizardStep,
};

/// Form fields subject to validation, keyed the way the serialized draft
/// spells them so surfaces can attach inline errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    OwnerName,
    OwnerAddress,
    OwnerPhone,
    DogName,
    DogBreed,
    DogAge,
    DogGender,
    SpayedNeutered,
    RabiesVaccination,
}

impl DraftField {
    /// The wizard screen that collects this field.
    pub const fn step(self) -> WizardStep {
        match self {
            DraftField::OwnerName | DraftField::OwnerAddress | DraftField::OwnerPhone => {
                WizardStep::OwnerInfo
            }
            _ => WizardStep::DogInfo,
        }
    }
}

/// A single inline error: which field failed and the message shown beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: DraftField,
    pub message: &'static str,
}

/// Outcome of validating one wizard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: WizardStep,
    pub issues: Vec<FieldIssue>,
}

impl StepReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Whole-form validation failure raised at submission time.
#[derive(Debug, Clone, thiserror::Error)]
#[error("application failed validation on {} field(s)", issues.len())]
pub struct ValidationFailure {
    pub issues: Vec<FieldIssue>,
}

const MIN_OWNER_NAME_CHARS: usize = 2;
const MIN_ADDRESS_CHARS: usize = 5;
const MIN_PHONE_DIGITS: usize = 10;
const MIN_BREED_CHARS: usize = 2;

/// Validate the fields scoped to a single wizard screen. The review screen
/// has no gating fields and always reports valid.
pub fn validate_step(step: WizardStep, draft: &ApplicationDraft) -> StepReport {
    let mut issues = Vec::new();
    match step {
        WizardStep::OwnerInfo => owner_issues(draft, &mut issues),
        WizardStep::DogInfo => dog_issues(draft, &mut issues),
        WizardStep::Review => {}
    }
    StepReport { step, issues }
}

/// Validate the full form, the same check the submit action runs before a
/// record is ever minted.
pub fn validate_draft(draft: &ApplicationDraft) -> Result<(), ValidationFailure> {
    let mut issues = Vec::new();
    owner_issues(draft, &mut issues);
    dog_issues(draft, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { issues })
    }
}

/// Build the immutable submission record from a draft, re-running the full
/// form validation so an unvalidated draft can never become a record.
pub fn record_from_draft(
    draft: ApplicationDraft,
    id: ApplicationId,
    created_time: DateTime<Utc>,
) -> Result<LicenseApplication, ValidationFailure> {
    validate_draft(&draft)?;

    let (Some(dog_gender), Some(spayed_neutered)) = (draft.dog_gender, draft.spayed_neutered)
    else {
        // validate_draft already rejects missing answers
        return Err(ValidationFailure {
            issues: vec![
                FieldIssue {
                    field: DraftField::DogGender,
                    message: "Please select a gender",
                },
                FieldIssue {
                    field: DraftField::SpayedNeutered,
                    message: "Please select an option",
                },
            ],
        });
    };

    Ok(LicenseApplication {
        title: format!("Dog License for {}", draft.dog_name),
        description: format!("Owner: {}, Breed: {}", draft.owner_name, draft.dog_breed),
        id,
        owner_name: draft.owner_name,
        owner_address: draft.owner_address,
        owner_phone: draft.owner_phone,
        dog_name: draft.dog_name,
        dog_breed: draft.dog_breed,
        dog_age: draft.dog_age,
        dog_gender,
        spayed_neutered,
        rabies_vaccination: draft.rabies_vaccination,
        status: ApplicationStatus::Pending,
        created_time,
    })
}

fn owner_issues(draft: &ApplicationDraft, issues: &mut Vec<FieldIssue>) {
    if draft.owner_name.chars().count() < MIN_OWNER_NAME_CHARS {
        issues.push(FieldIssue {
            field: DraftField::OwnerName,
            message: "Owner name must be at least 2 characters",
        });
    }

    if draft.owner_address.chars().count() < MIN_ADDRESS_CHARS {
        issues.push(FieldIssue {
            field: DraftField::OwnerAddress,
            message: "Please enter a complete address",
        });
    }

    if !phone_shape_is_valid(&draft.owner_phone) {
        issues.push(FieldIssue {
            field: DraftField::OwnerPhone,
            message: "Please enter a valid phone number",
        });
    } else if digit_count(&draft.owner_phone) < MIN_PHONE_DIGITS {
        issues.push(FieldIssue {
            field: DraftField::OwnerPhone,
            message: "Phone number must be at least 10 digits",
        });
    }
}

fn dog_issues(draft: &ApplicationDraft, issues: &mut Vec<FieldIssue>) {
    if draft.dog_name.is_empty() {
        issues.push(FieldIssue {
            field: DraftField::DogName,
            message: "Dog name is required",
        });
    }

    if draft.dog_breed.chars().count() < MIN_BREED_CHARS {
        issues.push(FieldIssue {
            field: DraftField::DogBreed,
            message: "Breed must be at least 2 characters",
        });
    }

    if draft.dog_age == 0 {
        issues.push(FieldIssue {
            field: DraftField::DogAge,
            message: "Age must be a positive number",
        });
    }

    if draft.dog_gender.is_none() {
        issues.push(FieldIssue {
            field: DraftField::DogGender,
            message: "Please select a gender",
        });
    }

    if draft.spayed_neutered.is_none() {
        issues.push(FieldIssue {
            field: DraftField::SpayedNeutered,
            message: "Please select an option",
        });
    }

    if draft.rabies_vaccination.is_empty() {
        issues.push(FieldIssue {
            field: DraftField::RabiesVaccination,
            message: "Rabies vaccination date is required",
        });
    }
}

/// Digits plus common separators only; an empty value fails the shape check.
fn phone_shape_is_valid(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '-' | '(' | ')'))
}

fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}
