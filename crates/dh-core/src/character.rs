//! The character sheet and its counters.
//!
//! The sheet is plain data: the dice engine reads it and reports deltas,
//! and the caller applies those deltas back through the adjust methods.
//! Hope and fear are the two sides of the duality economy. The player
//! gains hope when the Hope die dominates a check, the GM banks fear.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::loadout::DamageProfile;
use crate::resource::Resource;
use crate::thresholds::Thresholds;

/// A playable character: identity, trackers, abilities, and loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Class name ("Guerrero", "Mago", ...).
    pub class_name: String,
    /// Character level.
    pub level: u32,
    /// Accumulated experience points.
    pub experience: u32,
    /// Hit points.
    pub hp: Resource,
    /// Armor score.
    pub armor: u32,
    /// Hope counter, never negative.
    pub hope: u32,
    /// Fear counter, never negative.
    pub fear: u32,
    /// Ability modifiers by name.
    pub abilities: HashMap<String, i32>,
    /// Damage thresholds checks are classified against.
    pub thresholds: Thresholds,
    /// Weapon damage profiles.
    pub weapons: Vec<DamageProfile>,
    /// Spell damage profiles.
    pub spells: Vec<DamageProfile>,
}

impl Character {
    /// Create a blank sheet with the given identity and hit point maximum.
    pub fn new(name: impl Into<String>, class_name: impl Into<String>, hp_max: i32) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            level: 1,
            experience: 0,
            hp: Resource::new(hp_max),
            armor: 0,
            hope: 0,
            fear: 0,
            abilities: HashMap::new(),
            thresholds: Thresholds::default(),
            weapons: Vec::new(),
            spells: Vec::new(),
        }
    }

    /// Add or replace an ability modifier.
    pub fn with_ability(mut self, name: impl Into<String>, modifier: i32) -> Self {
        self.abilities.insert(name.into(), modifier);
        self
    }

    /// Replace the damage thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Add a weapon profile.
    pub fn with_weapon(mut self, profile: DamageProfile) -> Self {
        self.weapons.push(profile);
        self
    }

    /// Add a spell profile.
    pub fn with_spell(mut self, profile: DamageProfile) -> Self {
        self.spells.push(profile);
        self
    }

    /// Look up an ability modifier by name.
    pub fn ability(&self, name: &str) -> Option<i32> {
        self.abilities.get(name).copied()
    }

    /// Look up a weapon profile by name.
    pub fn weapon(&self, name: &str) -> Option<&DamageProfile> {
        self.weapons.iter().find(|p| p.name == name)
    }

    /// Look up a spell profile by name.
    pub fn spell(&self, name: &str) -> Option<&DamageProfile> {
        self.spells.iter().find(|p| p.name == name)
    }

    /// Adjust hit points by a delta, clamped to `[0, max]`.
    /// Returns the new value.
    pub fn adjust_hp(&mut self, delta: i32) -> i32 {
        self.hp.adjust(delta)
    }

    /// Adjust the hope counter by a delta, never dropping below zero.
    /// Returns the new value.
    pub fn adjust_hope(&mut self, delta: i32) -> u32 {
        self.hope = self.hope.saturating_add_signed(delta);
        self.hope
    }

    /// Adjust the fear counter by a delta, never dropping below zero.
    /// Returns the new value.
    pub fn adjust_fear(&mut self, delta: i32) -> u32 {
        self.fear = self.fear.saturating_add_signed(delta);
        self.fear
    }
}
