use thiserror::Error;

/// Reasons a user count is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The input is not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),
    /// The input is an integer but zero or negative.
    #[error("count must be greater than zero, got {0}")]
    NotPositive(i128),
    /// The input is a positive integer that does not fit in 64 bits.
    #[error("count is too large: {0}")]
    TooLarge(i128),
}
