//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money arithmetic, allocation, lookup and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Caller supplied an argument outside the operation's domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Binary operation on two different currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: String,
        /// Currency of the other operand.
        found: String,
    },

    /// No descriptor registered for the code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// 64-bit arithmetic overflowed.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Encoding or decoding failed.
    #[error("Codec error: {0}")]
    Codec(String),
}

impl MoneyError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::Overflow(_) => "OVERFLOW",
            Self::Codec(_) => "CODEC_ERROR",
        }
    }

    /// Shorthand for [`MoneyError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for MoneyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err.to_string())
    }
}
