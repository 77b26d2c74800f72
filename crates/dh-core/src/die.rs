//! Polyhedral die vocabulary.
//!
//! Duality checks always run on d12s; damage and utility rolls use the rest
//! of the polyhedral family. Custom sizes are accepted anywhere a standard
//! die is, as long as they have at least two sides.

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
///
/// Defaults to [`Die::D12`], the standard check die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    #[default]
    D12,
    /// Twenty-sided die.
    D20,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::Custom(n) => n,
        }
    }

    /// Canonical die for a side count: standard sizes map to their named
    /// variant, anything else to [`Die::Custom`].
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            n => Self::Custom(n),
        }
    }

    /// Parse a die from a string like "d12", "d6", "d30".
    ///
    /// Rejects dice with fewer than two sides.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let num = s.strip_prefix('d')?.parse::<u32>().ok()?;
        if num >= 2 { Some(Self::from_sides(num)) } else { None }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::Custom(30).sides(), 30);
    }

    #[test]
    fn from_sides_is_canonical() {
        assert_eq!(Die::from_sides(12), Die::D12);
        assert_eq!(Die::from_sides(6), Die::D6);
        assert_eq!(Die::from_sides(30), Die::Custom(30));
    }

    #[test]
    fn die_parse() {
        assert_eq!(Die::parse("d12"), Some(Die::D12));
        assert_eq!(Die::parse("D6"), Some(Die::D6));
        assert_eq!(Die::parse(" d8 "), Some(Die::D8));
        assert_eq!(Die::parse("d30"), Some(Die::Custom(30)));
        assert_eq!(Die::parse("d1"), None);
        assert_eq!(Die::parse("d0"), None);
        assert_eq!(Die::parse("foo"), None);
        assert_eq!(Die::parse("12"), None);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D12.to_string(), "d12");
        assert_eq!(Die::Custom(30).to_string(), "d30");
    }

    #[test]
    fn default_is_check_die() {
        assert_eq!(Die::default(), Die::D12);
    }
}
