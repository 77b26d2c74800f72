//! Character model for the Daggerheart tracker: abilities, thresholds,
//! resources, and loadout.
//!
//! This crate is plain data. It defines the sheet the dice engine reads and
//! the vocabulary both sides share: no randomness, no I/O, no UI. Construct
//! a [`Character`] programmatically, start from a preset, or deserialize one
//! from JSON.

/// The character sheet and its counters.
pub mod character;
/// Polyhedral die vocabulary.
pub mod die;
/// Error types used throughout the crate.
pub mod error;
/// Weapon and spell damage profiles.
pub mod loadout;
/// Ready-made character sheets.
pub mod preset;
/// Clamped point pools.
pub mod resource;
/// Damage thresholds for check classification.
pub mod thresholds;

/// Re-export the character sheet.
pub use character::Character;
/// Re-export the die vocabulary.
pub use die::Die;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export damage profiles.
pub use loadout::DamageProfile;
/// Re-export the point pool.
pub use resource::Resource;
/// Re-export the threshold table.
pub use thresholds::Thresholds;
