//! Lending configuration.

use hubfin_core::{Currency, Money};
use hubfin_credit::options::{DEFAULT_INSTALLMENTS, INSTALLMENT_MENU};
use hubfin_credit::score::{MAX_SCORE, MIN_SCORE};
use hubfin_credit::source::{FixedScoreSource, SIMULATED_SCORE};
use hubfin_credit::validation::DEFAULT_MINIMUM_PRINCIPAL;
use hubfin_credit::{CreditScore, Validator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "HUBFIN_CONFIG";

/// Lending settings applied around the tier policy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingConfig {
    /// Currency loans are originated in.
    #[serde(default)]
    pub currency: Currency,

    /// Smallest principal accepted, regardless of tier.
    #[serde(default = "default_minimum_principal")]
    pub minimum_principal: Decimal,

    /// Terms offered by the loan form, in months.
    #[serde(default = "default_installment_menu")]
    pub installment_menu: Vec<u32>,

    /// Term pre-selected before the borrower picks one.
    #[serde(default = "default_installments")]
    pub default_installments: u32,

    /// Score reported while the credit service is simulated.
    #[serde(default = "default_simulated_score")]
    pub simulated_score: i32,
}

fn default_minimum_principal() -> Decimal {
    DEFAULT_MINIMUM_PRINCIPAL.amount()
}

fn default_installment_menu() -> Vec<u32> {
    INSTALLMENT_MENU.to_vec()
}

fn default_installments() -> u32 {
    DEFAULT_INSTALLMENTS
}

fn default_simulated_score() -> i32 {
    SIMULATED_SCORE.value()
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            minimum_principal: default_minimum_principal(),
            installment_menu: default_installment_menu(),
            default_installments: default_installments(),
            simulated_score: default_simulated_score(),
        }
    }
}

impl LendingConfig {
    /// Parses a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        config.validate_or_error()?;
        tracing::debug!(path = %path.display(), "loaded lending configuration");
        Ok(config)
    }

    /// Loads from `explicit`, else from `$HUBFIN_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the file [`LendingConfig::load`] would read, if any.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration as TOML to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Minimum principal as an amount in the configured currency.
    #[must_use]
    pub fn minimum_principal(&self) -> Money {
        Money::new(self.minimum_principal, self.currency)
    }

    /// Validator enforcing the configured floor.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new(self.minimum_principal())
    }

    /// Score source returning the simulated score.
    #[must_use]
    pub fn score_source(&self) -> FixedScoreSource {
        FixedScoreSource::new(CreditScore::new(self.simulated_score))
    }
}

impl Validate for LendingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.minimum_principal <= Decimal::ZERO {
            errors.push(ValidationError::new(
                "minimum_principal",
                "must be positive",
            ));
        }

        if self.installment_menu.is_empty() {
            errors.push(ValidationError::new("installment_menu", "must not be empty"));
        } else if self.installment_menu.contains(&0) {
            errors.push(ValidationError::new(
                "installment_menu",
                "terms must be at least 1",
            ));
        } else if self.installment_menu.windows(2).any(|w| w[0] >= w[1]) {
            errors.push(ValidationError::new(
                "installment_menu",
                "terms must be strictly increasing",
            ));
        }

        if self.default_installments == 0 {
            errors.push(ValidationError::new(
                "default_installments",
                "must be at least 1",
            ));
        }

        if !(MIN_SCORE..=MAX_SCORE).contains(&self.simulated_score) {
            errors.push(ValidationError::new(
                "simulated_score",
                format!("must be between {MIN_SCORE} and {MAX_SCORE}"),
            ));
        }

        errors
    }
}
