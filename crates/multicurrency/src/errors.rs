//! Error types for the multicurrency model.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, MoneyError>;

/// Errors raised while registering rates or reducing expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The bank has no rate for a non-identity currency pair.
    #[error("Exchange rate not found for {from}/{to}")]
    MissingRate { from: String, to: String },

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// The decimal amount left the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Rate table lock poisoned: {0}")]
    Lock(String),
}

impl MoneyError {
    /// Creates a MissingRate error.
    pub fn missing_rate(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::MissingRate {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for MoneyError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        MoneyError::Lock(err.to_string())
    }
}
