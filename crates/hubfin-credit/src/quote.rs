//! Loan quotes: the payment summary rendered beside the loan form.
//!
//! A quote is computed for every input change, valid or not, so the summary
//! always shows numbers; the validation outcome travels alongside them.

use hubfin_core::{Money, Rate};
use serde::Serialize;

use crate::amortization::{compute_installment, total_interest, total_payable};
use crate::policy::{policy_for, TierPolicy};
use crate::request::LoanRequest;
use crate::score::{CreditScore, CreditTier};
use crate::validation::{Accepted, RejectionReason, Validator};

/// Payment summary for a request at a given score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanQuote {
    /// Score the quote was priced at.
    pub score: CreditScore,
    /// Tier resolved from the score.
    pub tier: CreditTier,
    /// Tier label, in Portuguese.
    pub tier_label: &'static str,
    /// Principal requested.
    pub principal: Money,
    /// Installment count requested.
    pub installments: u32,
    /// Fixed installment amount, unrounded.
    pub installment_amount: Money,
    /// Installment amount times installment count.
    pub total_payable: Money,
    /// Total payable minus principal.
    pub total_interest: Money,
    /// Interest rate per period.
    pub rate: Rate,
    /// Largest principal the tier allows.
    pub available_limit: Money,
    /// Validation failure, if any.
    pub rejection: Option<RejectionReason>,
}

impl LoanQuote {
    /// Quotes `request` at `score` with the default validator.
    #[must_use]
    pub fn new(score: CreditScore, request: &LoanRequest) -> Self {
        Self::with_validator(score, request, &Validator::default())
    }

    /// Quotes `request` at `score` with a specific validator.
    #[must_use]
    pub fn with_validator(score: CreditScore, request: &LoanRequest, validator: &Validator) -> Self {
        let policy = policy_for(score.tier());
        let rejection = validator.validate(request, policy).err();
        Self::priced(score, request, policy, rejection)
    }

    fn priced(
        score: CreditScore,
        request: &LoanRequest,
        policy: &TierPolicy,
        rejection: Option<RejectionReason>,
    ) -> Self {
        let installment_amount =
            compute_installment(request.principal, request.installments, policy.interest_rate);
        Self {
            score,
            tier: policy.tier,
            tier_label: policy.label,
            principal: request.principal,
            installments: request.installments,
            installment_amount,
            total_payable: total_payable(installment_amount, request.installments),
            total_interest: total_interest(
                request.principal,
                installment_amount,
                request.installments,
            ),
            rate: policy.interest_rate,
            available_limit: policy.max_principal,
            rejection,
        }
    }

    /// Returns true if the request passed validation.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Converts the quote into the validator's outcome.
    pub fn outcome(&self) -> Result<Accepted, RejectionReason> {
        match self.rejection {
            Some(reason) => Err(reason),
            None => Ok(Accepted {
                principal: self.principal,
                installments: self.installments,
                rate: self.rate,
                installment_amount: self.installment_amount,
                total_payable: self.total_payable,
            }),
        }
    }
}

/// Quotes a bare principal and term at `score`.
///
/// ```rust
/// use hubfin_core::Money;
/// use hubfin_credit::quote::quote;
/// use hubfin_credit::{CreditScore, CreditTier};
/// use rust_decimal_macros::dec;
///
/// let q = quote(CreditScore::new(720), Money::brl(dec!(12000)), 12);
/// assert_eq!(q.tier, CreditTier::Good);
/// assert!(q.is_accepted());
/// assert_eq!(q.installment_amount.round_to_cents().amount(), dec!(1134.72));
/// ```
#[must_use]
pub fn quote(score: CreditScore, principal: Money, installments: u32) -> LoanQuote {
    LoanQuote::new(score, &LoanRequest::new(principal, installments))
}
