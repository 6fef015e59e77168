use serde::{Deserialize, Serialize};

use super::domain::SpayNeuterStatus;

const DEFAULT_ALTERED_FEE: u32 = 15;
const DEFAULT_STANDARD_FEE: u32 = 25;

/// Flat license fees in whole dollars, keyed by spay/neuter status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub altered_fee: u32,
    pub standard_fee: u32,
}

impl FeeSchedule {
    /// Quote the fee for the current spay/neuter answer. Pure and re-derived
    /// on every call; an unanswered field quotes the standard fee, matching
    /// what the review screen shows before the field is filled in.
    pub fn quote(&self, answer: Option<SpayNeuterStatus>) -> u32 {
        match answer {
            Some(SpayNeuterStatus::Yes) => self.altered_fee,
            _ => self.standard_fee,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            altered_fee: DEFAULT_ALTERED_FEE,
            standard_fee: DEFAULT_STANDARD_FEE,
        }
    }
}

/// Render a whole-dollar fee the way the form displays it, e.g. `$25.00`.
pub fn display_usd(amount: u32) -> String {
    format!("${amount}.00")
}
