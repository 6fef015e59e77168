use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted license applications.
///
/// Ids are minted once at submission time and never change; the tracking
/// surface uses them as the sole lookup handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// The three sequential screens of the application wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    OwnerInfo,
    DogInfo,
    Review,
}

impl WizardStep {
    pub const fn first() -> Self {
        WizardStep::OwnerInfo
    }

    pub const fn number(self) -> u8 {
        match self {
            WizardStep::OwnerInfo => 1,
            WizardStep::DogInfo => 2,
            WizardStep::Review => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WizardStep::OwnerInfo => "Owner Information",
            WizardStep::DogInfo => "Dog Information",
            WizardStep::Review => "Review & Payment",
        }
    }

    /// Next screen in the linear sequence, `None` on the final step.
    pub const fn next(self) -> Option<Self> {
        match self {
            WizardStep::OwnerInfo => Some(WizardStep::DogInfo),
            WizardStep::DogInfo => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Previous screen, `None` on the first step.
    pub const fn back(self) -> Option<Self> {
        match self {
            WizardStep::OwnerInfo => None,
            WizardStep::DogInfo => Some(WizardStep::OwnerInfo),
            WizardStep::Review => Some(WizardStep::DogInfo),
        }
    }

    pub const fn is_review(self) -> bool {
        matches!(self, WizardStep::Review)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DogGender {
    Male,
    Female,
}

impl DogGender {
    pub const fn label(self) -> &'static str {
        match self {
            DogGender::Male => "Male",
            DogGender::Female => "Female",
        }
    }
}

/// Spay/neuter answer as collected on the form. The answer drives the fee
/// schedule, so it stays a distinct type rather than a bare bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpayNeuterStatus {
    Yes,
    No,
}

impl SpayNeuterStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SpayNeuterStatus::Yes => "Yes",
            SpayNeuterStatus::No => "No",
        }
    }
}

/// In-progress form values. Every field defaults so partially saved drafts
/// still parse, and the serialized layout matches the blob the tracking
/// surface and any prior saves expect (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub owner_name: String,
    pub owner_address: String,
    pub owner_phone: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_age: u32,
    pub dog_gender: Option<DogGender>,
    pub spayed_neutered: Option<SpayNeuterStatus>,
    pub rabies_vaccination: String,
}

/// High level status rendered by the tracking surface. This core only ever
/// writes `Pending`; later transitions belong to the county review side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// Immutable record created at submission time and appended to the
/// applications collection. Field layout is shared verbatim with the
/// tracking surface, so the derived `title`/`description` templates must not
/// be reformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseApplication {
    pub id: ApplicationId,
    pub owner_name: String,
    pub owner_address: String,
    pub owner_phone: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_age: u32,
    pub dog_gender: DogGender,
    pub spayed_neutered: SpayNeuterStatus,
    pub rabies_vaccination: String,
    pub status: ApplicationStatus,
    pub created_time: DateTime<Utc>,
    pub title: String,
    pub description: String,
}
