//! Credit scores and the tiers they resolve to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CreditError;

/// Lowest score on the bureau scale.
pub const MIN_SCORE: i32 = 0;

/// Highest score on the bureau scale.
pub const MAX_SCORE: i32 = 900;

/// A borrower's credit score.
///
/// Scores are conceptually in `[0, 900]`, but any integer is accepted and
/// resolves to a tier; out-of-range values land in the outermost tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditScore(i32);

impl CreditScore {
    /// Wraps a raw score.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw score.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Returns the tier this score falls into.
    #[must_use]
    pub fn tier(&self) -> CreditTier {
        resolve_tier(self.0)
    }

    /// Returns true if the score is within the bureau scale.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.0)
    }
}

impl From<i32> for CreditScore {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discrete credit-risk bucket governing lending terms.
///
/// Variants are declared from best to worst, so the derived ordering has
/// `Excellent < Good < ... < VeryPoor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditTier {
    /// Score of 751 and above.
    Excellent,
    /// Score from 601 to 750.
    Good,
    /// Score from 451 to 600.
    Regular,
    /// Score from 301 to 450.
    Poor,
    /// Score of 300 and below.
    VeryPoor,
}

impl CreditTier {
    /// Number of tiers.
    pub const COUNT: usize = 5;

    /// All tiers, best first.
    pub const ALL: [CreditTier; Self::COUNT] = [
        CreditTier::Excellent,
        CreditTier::Good,
        CreditTier::Regular,
        CreditTier::Poor,
        CreditTier::VeryPoor,
    ];

    /// Position of this tier in [`CreditTier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CreditTier::Excellent => 0,
            CreditTier::Good => 1,
            CreditTier::Regular => 2,
            CreditTier::Poor => 3,
            CreditTier::VeryPoor => 4,
        }
    }

    /// Lowest score (inclusive) that still maps to this tier.
    ///
    /// `VeryPoor` is unbounded below and reports `i32::MIN`.
    #[must_use]
    pub const fn min_score(self) -> i32 {
        match self {
            CreditTier::Excellent => 751,
            CreditTier::Good => 601,
            CreditTier::Regular => 451,
            CreditTier::Poor => 301,
            CreditTier::VeryPoor => i32::MIN,
        }
    }

    /// Stable lowercase code, as used by the dashboard.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "excellent",
            CreditTier::Good => "good",
            CreditTier::Regular => "regular",
            CreditTier::Poor => "poor",
            CreditTier::VeryPoor => "very-poor",
        }
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CreditTier {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "excellent" => Ok(CreditTier::Excellent),
            "good" => Ok(CreditTier::Good),
            "regular" => Ok(CreditTier::Regular),
            "poor" => Ok(CreditTier::Poor),
            "very-poor" | "verypoor" => Ok(CreditTier::VeryPoor),
            _ => Err(CreditError::UnknownTier {
                code: s.to_string(),
            }),
        }
    }
}

/// Resolves a raw score to its tier.
///
/// Total over all integers. Each tier's lower bound is inclusive:
///
/// ```rust
/// use hubfin_credit::{resolve_tier, CreditTier};
///
/// assert_eq!(resolve_tier(751), CreditTier::Excellent);
/// assert_eq!(resolve_tier(750), CreditTier::Good);
/// assert_eq!(resolve_tier(-20), CreditTier::VeryPoor);
/// ```
#[must_use]
pub fn resolve_tier(score: i32) -> CreditTier {
    let tier = match score {
        751.. => CreditTier::Excellent,
        601..=750 => CreditTier::Good,
        451..=600 => CreditTier::Regular,
        301..=450 => CreditTier::Poor,
        _ => CreditTier::VeryPoor,
    };
    tracing::trace!(score, tier = tier.code(), "resolved credit tier");
    tier
}
