//! CLI command implementations.

pub mod config;
pub mod options;
pub mod policies;
pub mod quote;
pub mod schedule;
pub mod tier;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use options::OptionsArgs;
pub use policies::PoliciesArgs;
pub use quote::QuoteArgs;
pub use schedule::ScheduleArgs;
pub use tier::TierArgs;

use std::path::PathBuf;

use serde::Serialize;
use tabled::Tabled;

use hubfin_config::LendingConfig;
use hubfin_core::format::parse_amount;
use hubfin_core::Money;
use hubfin_credit::source::ScoreSource;
use hubfin_credit::CreditScore;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// State shared by every command.
pub struct Context {
    /// Effective lending configuration.
    pub config: LendingConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Requested output format.
    pub format: OutputFormat,
    /// Suppress informational lines.
    pub quiet: bool,
}

impl Context {
    /// Returns the score given on the command line, or asks the configured
    /// score source for one.
    pub fn score(&self, explicit: Option<i32>) -> CliResult<CreditScore> {
        let score = match explicit {
            Some(value) => CreditScore::new(value),
            None => {
                let score = self.config.score_source().fetch_score()?;
                tracing::info!(score = score.value(), "using simulated credit score");
                score
            }
        };
        if !score.is_in_range() {
            tracing::warn!(score = score.value(), "credit score outside 0-900 scale");
        }
        Ok(score)
    }

    /// Parses amount text into money in the configured currency.
    pub fn money(&self, text: &str) -> CliResult<Money> {
        parse_money(text, &self.config)
    }

    /// Like [`Context::money`], rejecting zero and negative amounts.
    pub fn positive_money(&self, text: &str) -> CliResult<Money> {
        let money = self.money(text)?;
        if !money.is_positive() {
            return Err(CliError::InvalidAmount(text.to_string()));
        }
        Ok(money)
    }
}

/// Parses user-entered amount text (`12000`, `12.000,50`, `R$ 1.500`).
pub fn parse_money(text: &str, config: &LendingConfig) -> CliResult<Money> {
    let amount = parse_amount(text).ok_or_else(|| CliError::InvalidAmount(text.to_string()))?;
    Ok(Money::new(amount, config.currency))
}

/// A labelled value in a two-column report.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct Field {
    #[tabled(rename = "Campo")]
    pub name: String,
    #[tabled(rename = "Valor")]
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Formats a money amount rounded to cents for machine-readable output.
pub fn plain_amount(money: Money) -> String {
    format!("{:.2}", money.round_to_cents().amount())
}
