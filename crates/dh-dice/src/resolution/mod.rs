//! Interpreting check dice.
//!
//! Two readings happen on a Daggerheart check: which duality die dominates
//! (the hope economy, [`duality`]) and where the total lands on the
//! character's damage thresholds (the success tier, [`classify`]). The
//! advantage family ([`advantage`]) only changes how many dice are rolled
//! before those readings.

pub mod advantage;
pub mod duality;

pub use advantage::RollMode;
pub use duality::{DominantDie, DualityDice};

use dh_core::Thresholds;
use serde::{Deserialize, Serialize};

/// The success tier of a check total, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Below the minor threshold.
    Failure,
    /// At or above the minor threshold.
    MinorSuccess,
    /// At or above the major threshold.
    MajorSuccess,
    /// At or above the severe threshold.
    CriticalSuccess,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure => write!(f, "Failure"),
            Self::MinorSuccess => write!(f, "Minor Success"),
            Self::MajorSuccess => write!(f, "Major Success"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
        }
    }
}

/// Classify a check total against a threshold table.
///
/// Lower bounds are inclusive and the result is monotone in `total`.
pub fn classify(thresholds: Thresholds, total: i32) -> Tier {
    let total = i64::from(total);
    if total >= i64::from(thresholds.severe) {
        Tier::CriticalSuccess
    } else if total >= i64::from(thresholds.major) {
        Tier::MajorSuccess
    } else if total >= i64::from(thresholds.minor) {
        Tier::MinorSuccess
    } else {
        Tier::Failure
    }
}
