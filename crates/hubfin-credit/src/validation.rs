//! Validation of loan requests against a tier policy.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. principal below the absolute floor → [`RejectionReason::BelowMinimum`]
//! 2. zero installments → [`RejectionReason::ZeroInstallments`]
//! 3. principal above the tier ceiling → [`RejectionReason::ExceedsPrincipalLimit`]
//! 4. installments above the tier ceiling → [`RejectionReason::ExceedsInstallmentLimit`]
//!
//! An accepted request carries its installment amount and total payable.

use hubfin_core::format::format_brl;
use hubfin_core::{Money, Rate};
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::amortization::{compute_installment, total_payable};
use crate::policy::TierPolicy;
use crate::request::LoanRequest;

/// Smallest principal the bank lends, regardless of tier.
pub const DEFAULT_MINIMUM_PRINCIPAL: Money = Money::brl(dec!(1000));

/// Why a loan request was turned down.
///
/// Every variant is user-correctable. [`RejectionReason::message`] renders
/// the Portuguese text shown next to the form field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Principal is below the absolute floor.
    #[error("principal below minimum of {minimum}")]
    BelowMinimum {
        /// The floor that applies.
        minimum: Money,
    },

    /// No installments were requested.
    #[error("installment count must be at least 1")]
    ZeroInstallments,

    /// Principal exceeds the tier's ceiling.
    #[error("principal exceeds tier limit of {max}")]
    ExceedsPrincipalLimit {
        /// The largest principal allowed for the tier.
        max: Money,
    },

    /// Installment count exceeds the tier's ceiling.
    #[error("installment count exceeds tier limit of {max}")]
    ExceedsInstallmentLimit {
        /// The largest installment count allowed for the tier.
        max: u32,
    },
}

impl RejectionReason {
    /// User-facing message, in Portuguese.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            RejectionReason::BelowMinimum { minimum } => {
                format!("Valor mínimo: {}", format_brl(minimum.amount()))
            }
            RejectionReason::ZeroInstallments => {
                "Informe ao menos 1 parcela.".to_string()
            }
            RejectionReason::ExceedsPrincipalLimit { max } => {
                format!("Valor máximo permitido: {}", format_brl(max.amount()))
            }
            RejectionReason::ExceedsInstallmentLimit { max } => {
                format!("Máximo de {max} parcelas permitidas para seu score.")
            }
        }
    }

    /// The request field the rejection refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            RejectionReason::BelowMinimum { .. } | RejectionReason::ExceedsPrincipalLimit { .. } => {
                "amount"
            }
            RejectionReason::ZeroInstallments
            | RejectionReason::ExceedsInstallmentLimit { .. } => "installments",
        }
    }
}

/// An accepted loan request with its payment terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accepted {
    /// Principal lent.
    pub principal: Money,
    /// Number of installments.
    pub installments: u32,
    /// Interest rate per period applied.
    pub rate: Rate,
    /// Fixed installment amount, unrounded.
    pub installment_amount: Money,
    /// Installment amount times installment count.
    pub total_payable: Money,
}

/// Validates requests against tier policies with a configurable floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    minimum_principal: Money,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_PRINCIPAL)
    }
}

impl Validator {
    /// Creates a validator with the given absolute principal floor.
    #[must_use]
    pub fn new(minimum_principal: Money) -> Self {
        Self { minimum_principal }
    }

    /// Returns the absolute principal floor.
    #[must_use]
    pub fn minimum_principal(&self) -> Money {
        self.minimum_principal
    }

    /// Checks `request` against `policy`.
    pub fn validate(
        &self,
        request: &LoanRequest,
        policy: &TierPolicy,
    ) -> Result<Accepted, RejectionReason> {
        let result = self.check(request, policy);
        match &result {
            Ok(accepted) => tracing::debug!(
                tier = policy.tier.code(),
                principal = %accepted.principal,
                installments = accepted.installments,
                installment = %accepted.installment_amount.round_to_cents(),
                "loan request accepted"
            ),
            Err(reason) => tracing::debug!(
                tier = policy.tier.code(),
                principal = %request.principal,
                installments = request.installments,
                %reason,
                "loan request rejected"
            ),
        }
        result
    }

    fn check(&self, request: &LoanRequest, policy: &TierPolicy) -> Result<Accepted, RejectionReason> {
        let principal = request.principal;
        let installments = request.installments;

        if principal.amount() < self.minimum_principal.amount() {
            return Err(RejectionReason::BelowMinimum {
                minimum: self.minimum_principal,
            });
        }
        if installments == 0 {
            return Err(RejectionReason::ZeroInstallments);
        }
        if !policy.allows_principal(&principal) {
            return Err(RejectionReason::ExceedsPrincipalLimit {
                max: policy.max_principal,
            });
        }
        if !policy.allows_installments(installments) {
            return Err(RejectionReason::ExceedsInstallmentLimit {
                max: policy.max_installments,
            });
        }

        let installment_amount = compute_installment(principal, installments, policy.interest_rate);
        Ok(Accepted {
            principal,
            installments,
            rate: policy.interest_rate,
            installment_amount,
            total_payable: total_payable(installment_amount, installments),
        })
    }
}

/// Validates a request using the default R$ 1.000,00 floor.
///
/// ```rust
/// use hubfin_core::Money;
/// use hubfin_credit::{policy_for, validate, CreditTier, LoanRequest, RejectionReason};
/// use rust_decimal_macros::dec;
///
/// let request = LoanRequest::new(Money::brl(dec!(200000)), 12);
/// let outcome = validate(&request, policy_for(CreditTier::Good));
/// assert_eq!(
///     outcome,
///     Err(RejectionReason::ExceedsPrincipalLimit { max: Money::brl(dec!(75000)) })
/// );
/// ```
pub fn validate(request: &LoanRequest, policy: &TierPolicy) -> Result<Accepted, RejectionReason> {
    Validator::default().validate(request, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::policy_for;
    use crate::score::CreditTier;

    fn request(principal: rust_decimal::Decimal, installments: u32) -> LoanRequest {
        LoanRequest::new(Money::brl(principal), installments)
    }

    #[test]
    fn test_exceeds_principal_limit() {
        let outcome = validate(&request(dec!(200000), 12), policy_for(CreditTier::Good));
        assert_eq!(
            outcome,
            Err(RejectionReason::ExceedsPrincipalLimit {
                max: Money::brl(dec!(75000))
            })
        );
    }

    #[test]
    fn test_exceeds_installment_limit() {
        let outcome = validate(&request(dec!(5000), 48), policy_for(CreditTier::VeryPoor));
        assert_eq!(outcome, Err(RejectionReason::ExceedsInstallmentLimit { max: 6 }));
    }

    #[test]
    fn test_below_minimum() {
        let outcome = validate(&request(dec!(999.99), 12), policy_for(CreditTier::Excellent));
        assert_eq!(
            outcome,
            Err(RejectionReason::BelowMinimum {
                minimum: DEFAULT_MINIMUM_PRINCIPAL
            })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Below the floor and above the installment ceiling: the floor is reported.
        let outcome = validate(&request(dec!(10), 48), policy_for(CreditTier::VeryPoor));
        assert!(matches!(outcome, Err(RejectionReason::BelowMinimum { .. })));

        // Above both ceilings: the principal ceiling is reported.
        let outcome = validate(&request(dec!(20000), 48), policy_for(CreditTier::VeryPoor));
        assert!(matches!(outcome, Err(RejectionReason::ExceedsPrincipalLimit { .. })));
    }

    #[test]
    fn test_zero_installments() {
        let outcome = validate(&request(dec!(5000), 0), policy_for(CreditTier::Good));
        assert_eq!(outcome, Err(RejectionReason::ZeroInstallments));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let policy = policy_for(CreditTier::Good);
        let accepted = validate(&request(dec!(75000), 36), policy).unwrap();
        assert_eq!(accepted.installments, 36);
        assert_eq!(accepted.rate, policy.interest_rate);

        let floor = validate(&request(dec!(1000), 6), policy);
        assert!(floor.is_ok());
    }

    #[test]
    fn test_accepted_carries_terms() {
        let accepted = validate(&request(dec!(12000), 12), policy_for(CreditTier::Good)).unwrap();
        assert_eq!(accepted.installment_amount.round_to_cents().amount(), dec!(1134.72));
        assert_eq!(
            accepted.total_payable,
            accepted.installment_amount * dec!(12)
        );
    }

    #[test]
    fn test_custom_floor() {
        let validator = Validator::new(Money::brl(dec!(500)));
        assert!(validator
            .validate(&request(dec!(600), 6), policy_for(CreditTier::VeryPoor))
            .is_ok());
        assert_eq!(validator.minimum_principal(), Money::brl(dec!(500)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RejectionReason::ExceedsPrincipalLimit {
                max: Money::brl(dec!(75000))
            }
            .message(),
            "Valor máximo permitido: R$ 75.000,00"
        );
        assert_eq!(
            RejectionReason::ExceedsInstallmentLimit { max: 6 }.message(),
            "Máximo de 6 parcelas permitidas para seu score."
        );
        assert_eq!(
            RejectionReason::BelowMinimum {
                minimum: DEFAULT_MINIMUM_PRINCIPAL
            }
            .message(),
            "Valor mínimo: R$ 1.000,00"
        );
        assert_eq!(RejectionReason::ZeroInstallments.field(), "installments");
    }

    #[test]
    fn test_serialized_reason_is_tagged() {
        let json = serde_json::to_value(RejectionReason::ExceedsInstallmentLimit { max: 6 }).unwrap();
        assert_eq!(json["reason"], "exceeds_installment_limit");
        assert_eq!(json["max"], 6);
    }
}
