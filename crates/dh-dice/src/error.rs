//! Error types for the dice engine.

use crate::session::SessionPhase;

/// Errors that can occur while resolving rolls.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// An ability referenced by a check is not on the character sheet.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A dice pool configuration is invalid.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A session operation was attempted from the wrong state.
    #[error("cannot {op}: session is {phase}")]
    InvalidSession {
        /// The attempted operation.
        op: &'static str,
        /// The state the session was in.
        phase: SessionPhase,
    },
}

/// Convenience result type for engine operations.
pub type DiceResult<T> = Result<T, DiceError>;
