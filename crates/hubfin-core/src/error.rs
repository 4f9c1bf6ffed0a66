//! Error types for the core money and rate primitives.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type HubResult<T> = Result<T, HubError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HubError {
    /// Invalid monetary amount.
    #[error("Invalid amount: {value} - {reason}")]
    InvalidAmount {
        /// The invalid amount.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid interest rate.
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The invalid rate as a decimal fraction.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// Unknown currency code.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The code that could not be resolved.
        code: String,
    },
}

impl HubError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}
