//! Periodic interest rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HubError, HubResult};

/// An interest rate per payment period.
///
/// Rates are stored as decimal fractions (0.02 = 2% per month).
///
/// # Example
///
/// ```rust
/// use hubfin_core::types::Rate;
/// use rust_decimal_macros::dec;
///
/// let rate = Rate::from_percentage(dec!(1.5));
/// assert_eq!(rate.value(), dec!(0.015));
/// assert_eq!(rate.as_percentage(), dec!(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Zero interest.
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Creates a rate from a decimal fraction (0.02 = 2%).
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage (2.0 = 2%).
    #[must_use]
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a decimal fraction.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Returns true if the rate is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Validates that the rate is not negative.
    ///
    /// # Errors
    ///
    /// Returns `HubError::InvalidRate` for negative rates.
    pub fn validate(&self) -> HubResult<()> {
        if self.0.is_sign_negative() && !self.0.is_zero() {
            return Err(HubError::invalid_rate(self.0, "Rate cannot be negative"));
        }
        Ok(())
    }
}

impl fmt::Display for Rate {
    /// Formats as a percentage with two decimals, e.g. `2.50%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        assert_eq!(Rate::new(dec!(0.025)).to_string(), "2.50%");
        assert_eq!(Rate::new(dec!(0.05)).to_string(), "5.00%");
        assert_eq!(Rate::ZERO.to_string(), "0.00%");
    }

    #[test]
    fn test_validate() {
        assert!(Rate::ZERO.validate().is_ok());
        assert!(Rate::new(dec!(0.035)).validate().is_ok());
        assert!(Rate::new(dec!(-0.01)).validate().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Rate::new(dec!(0.015)) < Rate::new(dec!(0.02)));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Rate::new(dec!(0.02))).unwrap();
        assert_eq!(json, "0.02");
    }
}
