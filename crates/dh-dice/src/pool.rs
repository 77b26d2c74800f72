//! Dice pool construction, rolling, and keep/drop selection.

use dh_core::Die;

use crate::error::{DiceError, DiceResult};
use crate::source::RandomSource;

/// Most dice one pool may roll.
pub const MAX_DICE: u32 = 1_000;

/// Largest die size one pool accepts.
///
/// Together with [`MAX_DICE`] this keeps every pool total well inside `i32`.
pub const MAX_SIDES: u32 = 10_000;

/// Which rolled dice count toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Every die counts.
    All,
    /// Only the K highest count.
    Highest(u32),
    /// Only the K lowest count.
    Lowest(u32),
}

/// A homogeneous pool: `count` dice of one size with a keep rule.
#[derive(Debug, Clone)]
pub struct DicePool {
    /// Number of dice rolled.
    pub count: u32,
    /// Die rolled.
    pub die: Die,
    /// Which results count.
    pub keep: Keep,
}

impl DicePool {
    /// Create a keep-all pool.
    pub fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die,
            keep: Keep::All,
        }
    }

    /// Keep only the `k` highest results.
    pub fn keep_highest(mut self, k: u32) -> Self {
        self.keep = Keep::Highest(k);
        self
    }

    /// Keep only the `k` lowest results.
    pub fn keep_lowest(mut self, k: u32) -> Self {
        self.keep = Keep::Lowest(k);
        self
    }

    /// Roll the pool and partition the results per the keep rule.
    ///
    /// Pools are rejected unless `1 <= count <= MAX_DICE` and
    /// `2 <= sides <= MAX_SIDES`.
    pub fn roll(&self, source: &mut impl RandomSource) -> DiceResult<PoolRoll> {
        self.validate()?;
        let rolled: Vec<u32> = (0..self.count)
            .map(|_| source.roll_die(self.die.sides()))
            .collect();
        Ok(partition(rolled, self.keep))
    }

    fn validate(&self) -> DiceResult<()> {
        if self.count == 0 {
            return Err(DiceError::InvalidPool(
                "dice count must be at least 1".to_string(),
            ));
        }
        if self.count > MAX_DICE {
            return Err(DiceError::InvalidPool(format!(
                "dice count must be at most {MAX_DICE}, got {}",
                self.count
            )));
        }
        if self.die.sides() < 2 {
            return Err(DiceError::InvalidPool(format!(
                "die must have at least 2 sides, got {}",
                self.die
            )));
        }
        if self.die.sides() > MAX_SIDES {
            return Err(DiceError::InvalidPool(format!(
                "die must have at most {MAX_SIDES} sides, got {}",
                self.die
            )));
        }
        match self.keep {
            Keep::All => Ok(()),
            Keep::Highest(k) | Keep::Lowest(k) if (1..=self.count).contains(&k) => Ok(()),
            Keep::Highest(k) | Keep::Lowest(k) => Err(DiceError::InvalidPool(format!(
                "cannot keep {k} of {} dice",
                self.count
            ))),
        }
    }
}

/// The outcome of rolling a pool, both partitions in roll order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRoll {
    /// Values counted toward the total.
    pub kept: Vec<u32>,
    /// Values dropped by the keep rule.
    pub discarded: Vec<u32>,
}

impl PoolRoll {
    /// Sum of the kept values.
    pub fn total(&self) -> u32 {
        self.kept.iter().sum()
    }
}

/// Split rolled values into kept and discarded, preserving roll order on
/// both sides. A tie on the keep boundary goes to the earlier roll.
fn partition(rolled: Vec<u32>, keep: Keep) -> PoolRoll {
    let (k, highest) = match keep {
        Keep::All => (rolled.len(), true),
        Keep::Highest(k) => (k as usize, true),
        Keep::Lowest(k) => (k as usize, false),
    };

    let mut order: Vec<usize> = (0..rolled.len()).collect();
    if highest {
        order.sort_by(|&a, &b| rolled[b].cmp(&rolled[a]).then(a.cmp(&b)));
    } else {
        order.sort_by(|&a, &b| rolled[a].cmp(&rolled[b]).then(a.cmp(&b)));
    }

    let mut keep_flags = vec![false; rolled.len()];
    for &idx in order.iter().take(k) {
        keep_flags[idx] = true;
    }

    let mut kept = Vec::with_capacity(k);
    let mut discarded = Vec::with_capacity(rolled.len() - k);
    for (idx, value) in rolled.into_iter().enumerate() {
        if keep_flags[idx] {
            kept.push(value);
        } else {
            discarded.push(value);
        }
    }

    PoolRoll { kept, discarded }
}
