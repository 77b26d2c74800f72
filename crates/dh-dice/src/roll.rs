//! Roll requests, results, and the resolution entry points.
//!
//! Every roll the tracker makes goes through here: duality ability checks,
//! the advantage family, weapon and spell damage, and loose handfuls of
//! dice. Results are immutable values. The engine reports what happened
//! and the caller applies any hope or hit point changes to the sheet.

use dh_core::{Character, DamageProfile, Die, Thresholds};
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::pool::DicePool;
use crate::resolution::{DominantDie, DualityDice, RollMode, Tier, classify};
use crate::source::RandomSource;

/// A bonus die rolled alongside a check, its value added to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusDie {
    /// The die rolled.
    pub die: Die,
    /// The value it showed.
    pub value: u32,
}

/// A request for a single roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RollRequest {
    /// A duality ability check: 2d12 plus an ability modifier.
    AbilityCheck {
        /// Ability name looked up on the sheet.
        ability: String,
        /// Flat situational modifier.
        modifier: i32,
    },
    /// An advantage-family roll: several dice, two of them count.
    Advantage {
        /// How many dice are rolled and which two count.
        mode: RollMode,
        /// Die size rolled.
        die: Die,
        /// Flat situational modifier.
        modifier: i32,
        /// Optional bonus die added to the total.
        bonus: Option<Die>,
        /// Thresholds to classify against, when the total should be tiered.
        thresholds: Option<Thresholds>,
    },
    /// A damage roll from a weapon or spell profile.
    Damage(DamageProfile),
    /// A loose handful of dice, summed with no modifier.
    Custom {
        /// Number of dice.
        count: u32,
        /// Die size.
        die: Die,
    },
}

impl RollRequest {
    /// The die size this request rolls.
    pub fn die(&self) -> Die {
        match self {
            Self::AbilityCheck { .. } => Die::D12,
            Self::Advantage { die, .. } | Self::Custom { die, .. } => *die,
            Self::Damage(profile) => profile.die,
        }
    }
}

/// The immutable outcome of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Die size rolled.
    pub die: Die,
    /// Values counted toward the total, in roll order. Duality checks list
    /// the pair as `[hope, fear]` even though only the dominant die scores.
    pub dice: Vec<u32>,
    /// Values dropped by the keep rule, in roll order.
    pub discarded: Vec<u32>,
    /// Bonus die rolled alongside the pool, if any.
    pub bonus: Option<BonusDie>,
    /// Sum of every modifier applied: ability, flat, and bonus die.
    pub modifier_applied: i32,
    /// Final score of the roll. Modifier arithmetic saturates at the
    /// `i32` limits rather than wrapping.
    pub total: i32,
    /// Success tier, when thresholds applied.
    pub tier: Option<Tier>,
    /// The duality pair, for ability checks.
    pub duality: Option<DualityDice>,
}

impl RollResult {
    /// Which duality die dominated, for ability checks.
    pub fn dominant(&self) -> Option<DominantDie> {
        self.duality.map(DualityDice::dominant)
    }

    /// Hope gained by this roll: 1 when the Hope die dominates, else 0.
    pub fn hope_delta(&self) -> u32 {
        self.duality.map_or(0, DualityDice::hope_delta)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice = self
            .dice
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{dice}]")?;
        match self.modifier_applied {
            0 => {}
            m if m > 0 => write!(f, " + {m}")?,
            m => write!(f, " - {}", m.unsigned_abs())?,
        }
        write!(f, " = {}", self.total)?;
        match (self.tier, self.dominant()) {
            (Some(tier), Some(dominant)) => write!(f, " ({tier}, {dominant})"),
            (Some(tier), None) => write!(f, " ({tier})"),
            (None, Some(dominant)) => write!(f, " ({dominant})"),
            (None, None) => Ok(()),
        }
    }
}

/// Resolve a duality ability check against a character sheet.
///
/// Rolls the Hope and Fear d12s; the dominant die plus the ability and flat
/// modifiers makes the total, classified against the sheet's thresholds.
pub fn ability_check(
    character: &Character,
    ability: &str,
    modifier: i32,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    let ability_mod = character
        .ability(ability)
        .ok_or_else(|| DiceError::UnknownAbility(ability.to_string()))?;

    let pair = DicePool::new(2, Die::D12).roll(source)?;
    let duality = DualityDice {
        hope: pair.kept[0],
        fear: pair.kept[1],
    };

    let modifier_applied = ability_mod.saturating_add(modifier);
    let total = (duality.result_die() as i32).saturating_add(modifier_applied);

    Ok(RollResult {
        die: Die::D12,
        dice: vec![duality.hope, duality.fear],
        discarded: Vec::new(),
        bonus: None,
        modifier_applied,
        total,
        tier: Some(classify(character.thresholds, total)),
        duality: Some(duality),
    })
}

/// Resolve an advantage-family roll.
///
/// The mode decides the pool shape; the kept pair is summed with the flat
/// modifier and the bonus die, if one rides along. The total is classified
/// only when thresholds are supplied.
pub fn advantage_roll(
    mode: RollMode,
    die: Die,
    modifier: i32,
    bonus: Option<Die>,
    thresholds: Option<Thresholds>,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    let pool = DicePool {
        count: mode.dice_rolled(),
        die,
        keep: mode.keep(),
    };
    let roll = pool.roll(source)?;

    let bonus = match bonus {
        Some(bonus_die) => Some(BonusDie {
            die: bonus_die,
            value: roll_one(bonus_die, source)?,
        }),
        None => None,
    };

    let modifier_applied = modifier.saturating_add(bonus.map_or(0, |b| b.value as i32));
    let total = (roll.total() as i32).saturating_add(modifier_applied);

    Ok(RollResult {
        die,
        dice: roll.kept,
        discarded: roll.discarded,
        bonus,
        modifier_applied,
        total,
        tier: thresholds.map(|t| classify(t, total)),
        duality: None,
    })
}

/// Roll a single die with a flat modifier, no tier.
pub fn single_die(
    die: Die,
    modifier: i32,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    sum_roll(1, die, modifier, source)
}

/// Roll a handful of dice and sum them, no modifier, no tier.
pub fn custom_dice(count: u32, die: Die, source: &mut impl RandomSource) -> DiceResult<RollResult> {
    sum_roll(count, die, 0, source)
}

/// Roll a weapon or spell damage profile, no tier.
pub fn damage_roll(
    profile: &DamageProfile,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    sum_roll(profile.count, profile.die, profile.modifier, source)
}

/// Resolve any request against a character sheet.
pub fn resolve(
    request: &RollRequest,
    character: &Character,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    match request {
        RollRequest::AbilityCheck { ability, modifier } => {
            ability_check(character, ability, *modifier, source)
        }
        RollRequest::Advantage {
            mode,
            die,
            modifier,
            bonus,
            thresholds,
        } => advantage_roll(*mode, *die, *modifier, *bonus, *thresholds, source),
        RollRequest::Damage(profile) => damage_roll(profile, source),
        RollRequest::Custom { count, die } => custom_dice(*count, *die, source),
    }
}

fn sum_roll(
    count: u32,
    die: Die,
    modifier: i32,
    source: &mut impl RandomSource,
) -> DiceResult<RollResult> {
    let roll = DicePool::new(count, die).roll(source)?;
    let total = (roll.total() as i32).saturating_add(modifier);
    Ok(RollResult {
        die,
        dice: roll.kept,
        discarded: roll.discarded,
        bonus: None,
        modifier_applied: modifier,
        total,
        tier: None,
        duality: None,
    })
}

fn roll_one(die: Die, source: &mut impl RandomSource) -> DiceResult<u32> {
    Ok(DicePool::new(1, die).roll(source)?.total())
}
