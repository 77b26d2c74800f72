//! Duality dice: the Hope and Fear d12 pair.
//!
//! Every ability check rolls both. The higher die scores the check and
//! decides who profits: the player gains a hope when Hope dominates, the
//! GM banks a fear when Fear does. A matched pair scores the Hope die and
//! grants neither.

use serde::{Deserialize, Serialize};

/// Which duality die came up higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantDie {
    /// The Hope die dominates.
    Hope,
    /// The Fear die dominates.
    Fear,
    /// Both dice match.
    Tie,
}

impl std::fmt::Display for DominantDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hope => write!(f, "Hope"),
            Self::Fear => write!(f, "Fear"),
            Self::Tie => write!(f, "Tie"),
        }
    }
}

/// The face-up pair of a duality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualityDice {
    /// The Hope die value.
    pub hope: u32,
    /// The Fear die value.
    pub fear: u32,
}

impl DualityDice {
    /// Which die dominates the pair.
    pub fn dominant(self) -> DominantDie {
        match self.hope.cmp(&self.fear) {
            std::cmp::Ordering::Greater => DominantDie::Hope,
            std::cmp::Ordering::Less => DominantDie::Fear,
            std::cmp::Ordering::Equal => DominantDie::Tie,
        }
    }

    /// The die that scores the check: the higher value, or the Hope die on
    /// a tie.
    pub fn result_die(self) -> u32 {
        if self.fear > self.hope {
            self.fear
        } else {
            self.hope
        }
    }

    /// Hope gained from this pair: 1 when Hope dominates, otherwise 0.
    pub fn hope_delta(self) -> u32 {
        u32::from(self.dominant() == DominantDie::Hope)
    }
}
