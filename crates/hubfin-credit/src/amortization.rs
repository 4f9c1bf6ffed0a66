//! Fixed-installment amortization.
//!
//! A loan of principal `P` at rate `r` per period over `n` periods is repaid
//! with a constant installment
//!
//! ```text
//! payment = P * (r * (1 + r)^n) / ((1 + r)^n - 1)
//! ```
//!
//! The formula is 0/0 when `r == 0`; that case is computed as `P / n`.
//!
//! All arithmetic is exact decimal arithmetic, so repeated calls with the
//! same inputs return identical values. Results are not rounded here.

use hubfin_core::{Money, Rate};
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::{CreditError, CreditResult};

/// Computes the fixed installment for a principal, term and periodic rate.
///
/// An installment count of zero is treated as a single period; use
/// [`try_compute_installment`] to reject it instead. The result is never
/// below the zero-rate installment `principal / n`. When `(1 + rate)^n`
/// leaves the decimal range the installment is its limit, `principal * rate`.
///
/// ```rust
/// use hubfin_core::{Money, Rate};
/// use hubfin_credit::amortization::compute_installment;
/// use rust_decimal_macros::dec;
///
/// let payment = compute_installment(Money::brl(dec!(12000)), 12, Rate::ZERO);
/// assert_eq!(payment.amount(), dec!(1000));
///
/// let endless = compute_installment(Money::brl(dec!(12000)), 5000, Rate::new(dec!(0.02)));
/// assert_eq!(endless.amount(), dec!(240));
/// ```
#[must_use]
pub fn compute_installment(principal: Money, installments: u32, rate: Rate) -> Money {
    let periods = Decimal::from(installments.max(1));
    let straight = principal.amount() / periods;
    let r = rate.value();

    if r.is_zero() {
        return Money::new(straight, principal.currency());
    }

    let amount = principal
        .amount()
        .saturating_mul(annuity_factor(r, installments.max(1)));
    Money::new(amount.max(straight), principal.currency())
}

/// `r * (1 + r)^n / ((1 + r)^n - 1)` for `r > 0`, or `r` once the
/// compounding factor leaves the decimal range.
fn annuity_factor(r: Decimal, periods: u32) -> Decimal {
    (Decimal::ONE + r)
        .checked_powu(u64::from(periods))
        .and_then(|growth| {
            r.checked_mul(growth)?
                .checked_div(growth - Decimal::ONE)
        })
        .unwrap_or_else(|| {
            tracing::trace!(periods, "compounding factor out of range, using limit");
            r
        })
}

/// Checked variant of [`compute_installment`].
///
/// # Errors
///
/// - `CreditError::InvalidPrincipal` if the principal is not positive
/// - `CreditError::InvalidInstallmentCount` if `installments == 0`
/// - `CreditError::Core` if the rate is negative
/// - `CreditError::Overflow` if the installment leaves decimal range
pub fn try_compute_installment(
    principal: Money,
    installments: u32,
    rate: Rate,
) -> CreditResult<Money> {
    if !principal.is_positive() {
        return Err(CreditError::InvalidPrincipal {
            value: principal.amount(),
        });
    }
    if installments == 0 {
        return Err(CreditError::InvalidInstallmentCount { count: installments });
    }
    rate.validate()?;

    let straight = principal.amount() / Decimal::from(installments);
    let r = rate.value();
    if r.is_zero() {
        return Ok(Money::new(straight, principal.currency()));
    }

    let amount = principal
        .amount()
        .checked_mul(annuity_factor(r, installments))
        .ok_or_else(|| CreditError::overflow("installment out of range"))?;

    Ok(Money::new(amount.max(straight), principal.currency()))
}

/// Total paid over the life of the loan: `payment * installments`.
#[must_use]
pub fn total_payable(payment: Money, installments: u32) -> Money {
    Money::new(
        payment.amount().saturating_mul(Decimal::from(installments)),
        payment.currency(),
    )
}

/// Interest paid over the life of the loan: total payable minus principal.
#[must_use]
pub fn total_interest(principal: Money, payment: Money, installments: u32) -> Money {
    total_payable(payment, installments) - principal
}

/// One period of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Period number, starting at 1.
    pub period: u32,
    /// Installment paid in this period.
    pub payment: Money,
    /// Interest portion of the installment.
    pub interest: Money,
    /// Principal portion of the installment.
    pub principal: Money,
    /// Outstanding balance after this payment.
    pub balance: Money,
}

/// Builds the period-by-period schedule of a fixed-installment loan.
///
/// Amounts are rounded to cents each period. The final period repays the
/// whole remaining balance, so the principal column sums to the original
/// principal and the last balance is exactly zero.
pub fn amortization_schedule(
    principal: Money,
    installments: u32,
    rate: Rate,
) -> CreditResult<Vec<ScheduleEntry>> {
    let payment = try_compute_installment(principal, installments, rate)?.round_to_cents();
    let zero = Money::zero(principal.currency());

    let mut balance = principal;
    let mut entries = Vec::with_capacity(installments as usize);

    for period in 1..=installments {
        let interest = (balance * rate.value()).round_to_cents();
        let (payment, repaid) = if period == installments {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance = balance - repaid;

        entries.push(ScheduleEntry {
            period,
            payment,
            interest,
            principal: repaid,
            balance: if balance.amount().is_zero() { zero } else { balance },
        });
    }

    Ok(entries)
}
