//! Error types for the credit engine.
//!
//! Validation outcomes are not errors: a rejected loan request is a
//! [`RejectionReason`](crate::RejectionReason) value. The errors here cover
//! arguments the engine cannot compute with at all.

use hubfin_core::HubError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for credit engine operations.
pub type CreditResult<T> = Result<T, CreditError>;

/// The main error type for credit engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreditError {
    /// Installment count must be at least one.
    #[error("Invalid installment count: {count} - must be at least 1")]
    InvalidInstallmentCount {
        /// The offending installment count.
        count: u32,
    },

    /// Principal must be strictly positive.
    #[error("Invalid principal: {value} - must be positive")]
    InvalidPrincipal {
        /// The offending principal.
        value: Decimal,
    },

    /// Intermediate result exceeded decimal range.
    #[error("Arithmetic overflow: {reason}")]
    Overflow {
        /// Description of the computation that overflowed.
        reason: String,
    },

    /// The credit score could not be obtained.
    #[error("Credit score unavailable: {reason}")]
    ScoreUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// Unrecognized tier code.
    #[error("Unknown credit tier: {code}")]
    UnknownTier {
        /// The code that could not be resolved.
        code: String,
    },

    /// Error from a core money or rate primitive.
    #[error(transparent)]
    Core(#[from] HubError),
}

impl CreditError {
    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(reason: impl Into<String>) -> Self {
        Self::Overflow {
            reason: reason.into(),
        }
    }

    /// Creates a score unavailable error.
    #[must_use]
    pub fn score_unavailable(reason: impl Into<String>) -> Self {
        Self::ScoreUnavailable {
            reason: reason.into(),
        }
    }
}
