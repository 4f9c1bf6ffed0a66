//! Lending policy per credit tier.
//!
//! The table is static and indexed by [`CreditTier::index`], so adding a tier
//! without a policy fails to compile rather than falling back at runtime.

use hubfin_core::{Money, Rate};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::score::CreditTier;

/// Lending terms offered to a credit tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPolicy {
    /// Tier this policy applies to.
    pub tier: CreditTier,
    /// Display label, in Portuguese.
    pub label: &'static str,
    /// Interest rate per monthly period.
    pub interest_rate: Rate,
    /// Largest principal that may be requested.
    pub max_principal: Money,
    /// Largest number of installments that may be requested.
    pub max_installments: u32,
    /// Display color for the tier badge.
    pub color: &'static str,
    /// Short explanation shown next to the score, in Portuguese.
    pub description: &'static str,
}

static POLICIES: [TierPolicy; CreditTier::COUNT] = [
    TierPolicy {
        tier: CreditTier::Excellent,
        label: "Excelente",
        interest_rate: Rate::new(dec!(0.015)),
        max_principal: Money::brl(dec!(100000)),
        max_installments: 48,
        color: "#10B981",
        description: "Você tem um excelente histórico de crédito!",
    },
    TierPolicy {
        tier: CreditTier::Good,
        label: "Bom",
        interest_rate: Rate::new(dec!(0.02)),
        max_principal: Money::brl(dec!(75000)),
        max_installments: 36,
        color: "#3B82F6",
        description: "Seu score de crédito é bom.",
    },
    TierPolicy {
        tier: CreditTier::Regular,
        label: "Regular",
        interest_rate: Rate::new(dec!(0.025)),
        max_principal: Money::brl(dec!(50000)),
        max_installments: 24,
        color: "#F59E0B",
        description: "Seu score de crédito está regular.",
    },
    TierPolicy {
        tier: CreditTier::Poor,
        label: "Ruim",
        interest_rate: Rate::new(dec!(0.035)),
        max_principal: Money::brl(dec!(25000)),
        max_installments: 12,
        color: "#EF4444",
        description: "Seu score de crédito precisa melhorar.",
    },
    TierPolicy {
        tier: CreditTier::VeryPoor,
        label: "Muito Ruim",
        interest_rate: Rate::new(dec!(0.05)),
        max_principal: Money::brl(dec!(10000)),
        max_installments: 6,
        color: "#DC2626",
        description: "Seu score de crédito está muito baixo.",
    },
];

/// Returns the lending policy for a tier.
///
/// ```rust
/// use hubfin_credit::{policy_for, CreditTier};
///
/// let policy = policy_for(CreditTier::VeryPoor);
/// assert_eq!(policy.max_installments, 6);
/// ```
#[must_use]
pub fn policy_for(tier: CreditTier) -> &'static TierPolicy {
    &POLICIES[tier.index()]
}

/// Iterates every policy, from Excellent down to VeryPoor.
pub fn all_policies() -> impl Iterator<Item = &'static TierPolicy> {
    POLICIES.iter()
}

impl TierPolicy {
    /// Returns true if `installments` is within this tier's ceiling.
    #[must_use]
    pub fn allows_installments(&self, installments: u32) -> bool {
        installments <= self.max_installments
    }

    /// Returns true if `principal` is within this tier's ceiling.
    #[must_use]
    pub fn allows_principal(&self, principal: &Money) -> bool {
        principal.amount() <= self.max_principal.amount()
    }
}
