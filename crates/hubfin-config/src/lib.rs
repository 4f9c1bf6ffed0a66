//! Hub Financeiro Configuration Layer
//!
//! Lending settings that sit outside the static tier table: the absolute
//! principal floor, the installment menu offered by the form, the default
//! term, the currency, and the score used while the credit service is
//! simulated.
//!
//! # Example
//!
//! ```rust
//! use hubfin_config::{LendingConfig, Validate};
//!
//! let config = LendingConfig::from_toml_str(r#"
//!     minimum_principal = 500.0
//!     installment_menu = [3, 6, 12]
//! "#).unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.default_installments, 12);
//! ```
//!
//! # Resolution
//!
//! [`LendingConfig::load`] reads an explicit path if given, otherwise the
//! file named by `HUBFIN_CONFIG`, otherwise falls back to defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod lending;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use lending::{LendingConfig, CONFIG_ENV_VAR};
