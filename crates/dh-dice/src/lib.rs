//! Dice resolution engine for the Daggerheart tracker.
//!
//! Provides random sources, dice pools with keep/drop rules, duality
//! checks with threshold tiers, the advantage roll family, and roll
//! sessions that feed the tracker's dice animation. The engine owns no
//! character state: it reads a sheet, resolves one roll, and reports an
//! immutable result.

pub mod error;
pub mod pool;
pub mod resolution;
pub mod roll;
pub mod session;
pub mod source;

pub use error::{DiceError, DiceResult};
pub use pool::{DicePool, Keep, MAX_DICE, MAX_SIDES, PoolRoll};
pub use resolution::{DominantDie, DualityDice, RollMode, Tier, classify};
pub use roll::{
    BonusDie, RollRequest, RollResult, ability_check, advantage_roll, custom_dice, damage_roll,
    resolve, single_die,
};
pub use session::{RollSession, SessionPhase};
pub use source::{RandomSource, Scripted};
