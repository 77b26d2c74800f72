//! Advantage modes for check rolls.
//!
//! The tracker's roll screen offers five modes. Every mode keeps exactly
//! two dice; advantage stacks more dice to pick the two highest from,
//! disadvantage picks the two lowest.

use serde::{Deserialize, Serialize};

use crate::pool::Keep;

/// How many dice a check rolls and which two of them count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollMode {
    /// Two dice, both count.
    #[default]
    Normal,
    /// Three dice, the two highest count.
    Advantage,
    /// Three dice, the two lowest count.
    Disadvantage,
    /// Four dice, the two highest count.
    DoubleAdvantage,
    /// Five dice, the two highest count.
    TripleAdvantage,
}

impl RollMode {
    /// Number of dice rolled in this mode.
    pub fn dice_rolled(self) -> u32 {
        match self {
            Self::Normal => 2,
            Self::Advantage | Self::Disadvantage => 3,
            Self::DoubleAdvantage => 4,
            Self::TripleAdvantage => 5,
        }
    }

    /// The keep rule applied to the rolled dice.
    pub fn keep(self) -> Keep {
        match self {
            Self::Normal => Keep::All,
            Self::Disadvantage => Keep::Lowest(2),
            Self::Advantage | Self::DoubleAdvantage | Self::TripleAdvantage => Keep::Highest(2),
        }
    }

    /// Parse a mode from its English or Spanish label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "advantage" | "ventaja" => Some(Self::Advantage),
            "disadvantage" | "desventaja" => Some(Self::Disadvantage),
            "double advantage" | "doble ventaja" => Some(Self::DoubleAdvantage),
            "triple advantage" | "triple ventaja" => Some(Self::TripleAdvantage),
            _ => None,
        }
    }

    /// All modes, in the order the tracker lists them.
    pub fn all() -> [Self; 5] {
        [
            Self::Normal,
            Self::Advantage,
            Self::Disadvantage,
            Self::DoubleAdvantage,
            Self::TripleAdvantage,
        ]
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
            Self::DoubleAdvantage => write!(f, "double advantage"),
            Self::TripleAdvantage => write!(f, "triple advantage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_table() {
        assert_eq!(RollMode::Normal.dice_rolled(), 2);
        assert_eq!(RollMode::Normal.keep(), Keep::All);
        assert_eq!(RollMode::Advantage.dice_rolled(), 3);
        assert_eq!(RollMode::Advantage.keep(), Keep::Highest(2));
        assert_eq!(RollMode::Disadvantage.dice_rolled(), 3);
        assert_eq!(RollMode::Disadvantage.keep(), Keep::Lowest(2));
        assert_eq!(RollMode::DoubleAdvantage.dice_rolled(), 4);
        assert_eq!(RollMode::DoubleAdvantage.keep(), Keep::Highest(2));
        assert_eq!(RollMode::TripleAdvantage.dice_rolled(), 5);
        assert_eq!(RollMode::TripleAdvantage.keep(), Keep::Highest(2));
    }

    #[test]
    fn parse_labels() {
        assert_eq!(RollMode::parse("Normal"), Some(RollMode::Normal));
        assert_eq!(RollMode::parse("Ventaja"), Some(RollMode::Advantage));
        assert_eq!(RollMode::parse("desventaja"), Some(RollMode::Disadvantage));
        assert_eq!(
            RollMode::parse("Doble Ventaja"),
            Some(RollMode::DoubleAdvantage)
        );
        assert_eq!(
            RollMode::parse("triple advantage"),
            Some(RollMode::TripleAdvantage)
        );
        assert_eq!(RollMode::parse("ventaja doble"), None);
    }

    #[test]
    fn display_parses_back() {
        for mode in RollMode::all() {
            assert_eq!(RollMode::parse(&mode.to_string()), Some(mode));
        }
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(RollMode::default(), RollMode::Normal);
    }
}
