//! Clamped point pools.
//!
//! A resource is a numeric pool clamped to `[0, max]`, used for hit points
//! and anything else that drains and refills during play.

use serde::{Deserialize, Serialize};

/// A point pool clamped between zero and its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl Resource {
    /// Create a pool starting at its maximum value.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Create a pool with an explicit current value, clamped to bounds.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Adjust the pool by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(0, self.max);
        self.current
    }

    /// Replace the maximum and refill the pool to it.
    pub fn reset_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.current = self.max;
    }

    /// Returns true if the pool is drained.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the pool is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_full() {
        let r = Resource::new(30);
        assert_eq!(r.current, 30);
        assert_eq!(r.max, 30);
        assert!(r.is_full());
        assert!(!r.is_empty());
    }

    #[test]
    fn with_current_clamps() {
        let r = Resource::with_current(50, 30);
        assert_eq!(r.current, 30);
        let r = Resource::with_current(-5, 30);
        assert_eq!(r.current, 0);
    }

    #[test]
    fn adjust_clamps_to_max() {
        let mut r = Resource::new(5);
        assert_eq!(r.adjust(10), 5);
        assert!(r.is_full());
    }

    #[test]
    fn adjust_clamps_to_zero() {
        let mut r = Resource::new(5);
        assert_eq!(r.adjust(-20), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn adjust_normal() {
        let mut r = Resource::new(30);
        assert_eq!(r.adjust(-12), 18);
        assert!(!r.is_empty());
        assert!(!r.is_full());
    }

    #[test]
    fn reset_max_refills() {
        let mut r = Resource::new(30);
        r.adjust(-25);
        r.reset_max(40);
        assert_eq!(r.current, 40);
        assert_eq!(r.max, 40);
    }

    #[test]
    fn display() {
        let mut r = Resource::new(30);
        r.adjust(-18);
        assert_eq!(r.to_string(), "12/30");
    }
}
