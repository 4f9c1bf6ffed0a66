//! Credit score sources.
//!
//! The score comes from the user-profile service in production. The engine
//! only needs a way to ask for it, so the service sits behind
//! [`ScoreSource`].

use crate::error::CreditResult;
use crate::score::CreditScore;

/// Score the dashboard simulates until the credit service is wired in.
pub const SIMULATED_SCORE: CreditScore = CreditScore::new(720);

/// Supplies the borrower's credit score.
pub trait ScoreSource {
    /// Fetches the current score.
    fn fetch_score(&self) -> CreditResult<CreditScore>;
}

/// A source that always returns the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScoreSource {
    score: CreditScore,
}

impl FixedScoreSource {
    /// Creates a source returning `score`.
    #[must_use]
    pub fn new(score: CreditScore) -> Self {
        Self { score }
    }
}

impl Default for FixedScoreSource {
    fn default() -> Self {
        Self::new(SIMULATED_SCORE)
    }
}

impl ScoreSource for FixedScoreSource {
    fn fetch_score(&self) -> CreditResult<CreditScore> {
        Ok(self.score)
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for &S {
    fn fetch_score(&self) -> CreditResult<CreditScore> {
        (**self).fetch_score()
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for Box<S> {
    fn fetch_score(&self) -> CreditResult<CreditScore> {
        (**self).fetch_score()
    }
}
