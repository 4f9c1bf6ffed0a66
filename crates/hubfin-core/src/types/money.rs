//! Money type for loan amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::Currency;
use crate::error::{HubError, HubResult};
use crate::format::format_amount;

/// A decimal currency amount.
///
/// Arithmetic is exact decimal arithmetic; rounding to cents only happens
/// when explicitly requested via [`Money::round_to_cents`] or when the amount
/// is displayed.
///
/// # Example
///
/// ```rust
/// use hubfin_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let principal = Money::brl(dec!(12000));
/// assert_eq!(principal.currency(), Currency::BRL);
/// assert_eq!((principal / dec!(12)).amount(), dec!(1000));
/// assert_eq!(principal.to_string(), "R$ 12.000,00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new amount in the given currency.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates an amount in Brazilian Reais.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, Currency::BRL)
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Validates that the amount is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns `HubError::InvalidAmount` if the amount is zero or negative.
    pub fn validate_positive(&self) -> HubResult<()> {
        if !self.is_positive() {
            return Err(HubError::invalid_amount(
                self.amount,
                "Amount must be positive",
            ));
        }
        Ok(())
    }

    /// Rounds to the currency's minor unit, half away from zero.
    #[must_use]
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Adds two amounts, failing on a currency mismatch.
    pub fn checked_add(&self, other: &Self) -> HubResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts two amounts, failing on a currency mismatch.
    pub fn checked_sub(&self, other: &Self) -> HubResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    fn ensure_same_currency(&self, other: &Self) -> HubResult<()> {
        if self.currency != other.currency {
            return Err(HubError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl Add for Money {
    type Output = Self;

    /// Adds two amounts. The currency of the left operand is kept.
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.currency, rhs.currency);
        Self::new(self.amount + rhs.amount, self.currency)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.currency, rhs.currency);
        Self::new(self.amount - rhs.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount * rhs, self.currency)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount / rhs, self.currency)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.amount, self.currency.symbol()))
    }
}
