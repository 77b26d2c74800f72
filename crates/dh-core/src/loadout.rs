//! Weapon and spell damage profiles.
//!
//! A profile names a damage roll: some number of dice of one size plus a
//! flat modifier, the way the tracker stores "Espada (1d8)" or "Fuego (2d6)".

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{CoreError, CoreResult};

/// A named damage roll: `count` dice of one size plus a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageProfile {
    /// Display name ("Espada", "Fuego").
    pub name: String,
    /// Number of dice rolled.
    pub count: u32,
    /// Die rolled.
    pub die: Die,
    /// Flat modifier added to the summed dice.
    pub modifier: i32,
}

impl DamageProfile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, count: u32, die: Die, modifier: i32) -> Self {
        Self {
            name: name.into(),
            count,
            die,
            modifier,
        }
    }

    /// Parse a profile from dice notation like "1d8", "2d6+3", or "d12-1".
    ///
    /// A missing count means a single die. Rejects zero counts and dice
    /// with fewer than two sides.
    pub fn parse(name: impl Into<String>, notation: &str) -> CoreResult<Self> {
        let bad = || CoreError::Notation(notation.to_string());
        let s = notation.trim().to_lowercase();

        let (dice_part, modifier) = match s.find(['+', '-']) {
            Some(idx) => {
                let (dice, sign) = s.split_at(idx);
                (dice, sign.parse::<i32>().map_err(|_| bad())?)
            }
            None => (s.as_str(), 0),
        };

        let (count_part, sides_part) = dice_part.split_once('d').ok_or_else(bad)?;
        let count = if count_part.is_empty() {
            1
        } else {
            count_part.parse::<u32>().map_err(|_| bad())?
        };
        let sides = sides_part.parse::<u32>().map_err(|_| bad())?;
        if count == 0 || sides < 2 {
            return Err(bad());
        }

        Ok(Self::new(name, count, Die::from_sides(sides), modifier))
    }

    /// The profile's dice notation, e.g. "2d6+3".
    pub fn notation(&self) -> String {
        match self.modifier {
            0 => format!("{}{}", self.count, self.die),
            m if m > 0 => format!("{}{}+{m}", self.count, self.die),
            m => format!("{}{}{m}", self.count, self.die),
        }
    }
}

impl std::fmt::Display for DamageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_and_sides() {
        let p = DamageProfile::parse("Fuego", "2d6").unwrap();
        assert_eq!(p.count, 2);
        assert_eq!(p.die, Die::D6);
        assert_eq!(p.modifier, 0);
    }

    #[test]
    fn parse_with_modifier() {
        let p = DamageProfile::parse("Espada", "1d8+2").unwrap();
        assert_eq!(p.modifier, 2);
        let p = DamageProfile::parse("Daga", "d12-1").unwrap();
        assert_eq!(p.count, 1);
        assert_eq!(p.die, Die::D12);
        assert_eq!(p.modifier, -1);
    }

    #[test]
    fn parse_bare_die() {
        let p = DamageProfile::parse("Arco", "d6").unwrap();
        assert_eq!(p.count, 1);
        assert_eq!(p.die, Die::D6);
    }

    #[test]
    fn parse_canonicalizes_die() {
        let p = DamageProfile::parse("Maza", "1d30").unwrap();
        assert_eq!(p.die, Die::Custom(30));
        let p = DamageProfile::parse("Maza", "1d8").unwrap();
        assert_eq!(p.die, Die::D8);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DamageProfile::parse("x", "").is_err());
        assert!(DamageProfile::parse("x", "foo").is_err());
        assert!(DamageProfile::parse("x", "0d6").is_err());
        assert!(DamageProfile::parse("x", "1d1").is_err());
        assert!(DamageProfile::parse("x", "2d").is_err());
        assert!(DamageProfile::parse("x", "2d6+").is_err());
    }

    #[test]
    fn notation_strings() {
        assert_eq!(DamageProfile::new("a", 2, Die::D6, 0).notation(), "2d6");
        assert_eq!(DamageProfile::new("a", 1, Die::D8, 2).notation(), "1d8+2");
        assert_eq!(DamageProfile::new("a", 1, Die::D12, -1).notation(), "1d12-1");
    }

    #[test]
    fn display_label() {
        let p = DamageProfile::new("Espada", 1, Die::D8, 0);
        assert_eq!(p.to_string(), "Espada (1d8)");
    }
}
