//! # Hub Financeiro Credit
//!
//! Loan eligibility and installment engine.
//!
//! A borrower's credit score resolves to a [`CreditTier`]; each tier maps to a
//! static [`TierPolicy`] (rate per period, principal ceiling, installment
//! ceiling). Requests are validated against that policy and priced with the
//! fixed-installment amortization formula.
//!
//! ```text
//! CreditScore ──resolve_tier──▶ CreditTier ──policy_for──▶ TierPolicy
//!                                                              │
//!                        LoanRequest ──validate──▶ Accepted / RejectionReason
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hubfin_credit::prelude::*;
//! use hubfin_core::Money;
//! use rust_decimal_macros::dec;
//!
//! let tier = resolve_tier(720);
//! assert_eq!(tier, CreditTier::Good);
//!
//! let policy = policy_for(tier);
//! let request = LoanRequest::new(Money::brl(dec!(12000)), 12);
//! let accepted = validate(&request, policy).unwrap();
//! assert_eq!(accepted.installment_amount.round_to_cents().amount(), dec!(1134.72));
//! ```
//!
//! Everything in this crate is pure and synchronous; the policy table is
//! immutable static data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![deny(unsafe_code)]

pub mod amortization;
pub mod error;
pub mod options;
pub mod policy;
pub mod quote;
pub mod request;
pub mod score;
pub mod source;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{
        amortization_schedule, compute_installment, total_interest, total_payable,
        try_compute_installment, ScheduleEntry,
    };
    pub use crate::error::{CreditError, CreditResult};
    pub use crate::options::{clamp_installments, installment_options, INSTALLMENT_MENU};
    pub use crate::policy::{all_policies, policy_for, TierPolicy};
    pub use crate::quote::{quote, LoanQuote};
    pub use crate::request::{EmploymentStatus, LoanPurpose, LoanRequest};
    pub use crate::score::{resolve_tier, CreditScore, CreditTier};
    pub use crate::source::{FixedScoreSource, ScoreSource};
    pub use crate::validation::{validate, Accepted, RejectionReason, Validator};
}

// Re-export commonly used types at crate root
pub use error::{CreditError, CreditResult};
pub use policy::{policy_for, TierPolicy};
pub use request::LoanRequest;
pub use score::{resolve_tier, CreditScore, CreditTier};
pub use validation::{validate, Accepted, RejectionReason, Validator};
