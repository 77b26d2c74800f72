//! Damage thresholds for check classification.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The threshold table a check total is classified against.
///
/// Lower bounds are inclusive: a total at or above `severe` is a critical
/// success, at or above `major` a major success, at or above `minor` a minor
/// success, and anything below `minor` a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum total for a minor success.
    pub minor: u32,
    /// Minimum total for a major success.
    pub major: u32,
    /// Minimum total for a critical success.
    pub severe: u32,
}

impl Thresholds {
    /// Create a validated threshold table.
    ///
    /// Fails unless `minor <= major <= severe`.
    pub fn new(minor: u32, major: u32, severe: u32) -> CoreResult<Self> {
        if minor <= major && major <= severe {
            Ok(Self {
                minor,
                major,
                severe,
            })
        } else {
            Err(CoreError::ThresholdOrder {
                minor,
                major,
                severe,
            })
        }
    }
}

/// The tracker's default table: 10 / 16 / 22.
impl Default for Thresholds {
    fn default() -> Self {
        Self {
            minor: 10,
            major: 16,
            severe: 22,
        }
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.minor, self.major, self.severe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let t = Thresholds::default();
        assert_eq!(t.minor, 10);
        assert_eq!(t.major, 16);
        assert_eq!(t.severe, 22);
    }

    #[test]
    fn new_accepts_ordered() {
        let t = Thresholds::new(5, 5, 9).unwrap();
        assert_eq!(t.major, 5);
    }

    #[test]
    fn new_rejects_disordered() {
        assert!(Thresholds::new(16, 10, 22).is_err());
        assert!(Thresholds::new(10, 22, 16).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Thresholds::default().to_string(), "10/16/22");
    }
}
