//! Installment terms offered by the loan form.

use crate::policy::TierPolicy;

/// Terms offered by the loan form, in months.
pub const INSTALLMENT_MENU: [u32; 5] = [6, 12, 24, 36, 48];

/// Term pre-selected before the borrower's score is known.
pub const DEFAULT_INSTALLMENTS: u32 = 12;

/// Returns the entries of `menu` that `policy` allows, preserving order.
///
/// ```rust
/// use hubfin_credit::options::{installment_options, INSTALLMENT_MENU};
/// use hubfin_credit::{policy_for, CreditTier};
///
/// let options = installment_options(policy_for(CreditTier::Poor), &INSTALLMENT_MENU);
/// assert_eq!(options, vec![6, 12]);
/// ```
#[must_use]
pub fn installment_options(policy: &TierPolicy, menu: &[u32]) -> Vec<u32> {
    menu.iter()
        .copied()
        .filter(|&n| n > 0 && policy.allows_installments(n))
        .collect()
}

/// Lowers `requested` to the tier's ceiling when it exceeds it.
#[must_use]
pub fn clamp_installments(requested: u32, policy: &TierPolicy) -> u32 {
    requested.min(policy.max_installments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::policy_for;
    use crate::score::CreditTier;

    #[test]
    fn test_options_per_tier() {
        let expected: [(CreditTier, &[u32]); 5] = [
            (CreditTier::Excellent, &[6, 12, 24, 36, 48]),
            (CreditTier::Good, &[6, 12, 24, 36]),
            (CreditTier::Regular, &[6, 12, 24]),
            (CreditTier::Poor, &[6, 12]),
            (CreditTier::VeryPoor, &[6]),
        ];
        for (tier, options) in expected {
            assert_eq!(installment_options(policy_for(tier), &INSTALLMENT_MENU), options);
        }
    }

    #[test]
    fn test_custom_menu_drops_zero() {
        let options = installment_options(policy_for(CreditTier::Poor), &[0, 3, 10, 18]);
        assert_eq!(options, vec![3, 10]);
    }

    #[test]
    fn test_clamp_default_term() {
        assert_eq!(clamp_installments(DEFAULT_INSTALLMENTS, policy_for(CreditTier::VeryPoor)), 6);
        assert_eq!(clamp_installments(DEFAULT_INSTALLMENTS, policy_for(CreditTier::Good)), 12);
        assert_eq!(clamp_installments(60, policy_for(CreditTier::Excellent)), 48);
    }
}
