//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Amount text could not be parsed.
    #[error("Invalid amount: '{0}'. Use e.g. 12000, 12000.50 or 12.000,50.")]
    InvalidAmount(String),

    /// Loan request failed validation.
    #[error("{0}")]
    Rejected(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] hubfin_config::ConfigError),

    /// Credit engine error.
    #[error("Calculation error: {0}")]
    Credit(#[from] hubfin_credit::CreditError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
