/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when building character data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Damage thresholds must satisfy minor <= major <= severe.
    #[error("thresholds out of order: minor {minor}, major {major}, severe {severe}")]
    ThresholdOrder {
        /// Minimum total for a minor success.
        minor: u32,
        /// Minimum total for a major success.
        major: u32,
        /// Minimum total for a critical success.
        severe: u32,
    },

    /// A dice notation string could not be parsed.
    #[error("invalid dice notation: \"{0}\"")]
    Notation(String),
}
