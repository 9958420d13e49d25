//! Sources of final scores for matches whose kick-off has passed.
//!
//! There is no live results feed yet, so the default provider invents scores.
//! Anything that can answer "what was the score of this match?" implements
//! [`ResultProvider`], which keeps the completion filter free of randomness.

use std::collections::HashMap;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::models::{Match, MatchId};

/// Synthetic scores are drawn from `0..MAX_SYNTHETIC_GOALS`.
pub const MAX_SYNTHETIC_GOALS: u32 = 4;

/// Supplies the final score of a match, if one is known.
pub trait ResultProvider {
    /// Provider identifier for logging.
    fn name(&self) -> &'static str;

    /// `(home, away)` goals, or `None` when no result is available.
    fn result_for(&mut self, fixture: &Match) -> Option<(u32, u32)>;
}

/// Random scores in `[0, 4)` for both sides.
///
/// Scores are drawn afresh on every call, so the same match can get a
/// different score each time it is asked for. Seed it for repeatable output.
#[derive(Debug, Clone)]
pub struct RandomResults<R = ThreadRng> {
    rng: R,
}

impl RandomResults<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomResults<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomResults<StdRng> {
    /// Reproducible scores from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomResults<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ResultProvider for RandomResults<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn result_for(&mut self, _fixture: &Match) -> Option<(u32, u32)> {
        let home = self.rng.random_range(0..MAX_SYNTHETIC_GOALS);
        let away = self.rng.random_range(0..MAX_SYNTHETIC_GOALS);
        Some((home, away))
    }
}

/// Known scores keyed by match ID.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    scores: HashMap<MatchId, (u32, u32)>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score of a match, replacing any earlier entry.
    pub fn record(&mut self, match_id: MatchId, home: u32, away: u32) {
        self.scores.insert(match_id, (home, away));
    }

    /// Builder form of [`ScoreSheet::record`].
    pub fn with_score(mut self, match_id: MatchId, home: u32, away: u32) -> Self {
        self.record(match_id, home, away);
        self
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(MatchId, (u32, u32))> for ScoreSheet {
    fn from_iter<I: IntoIterator<Item = (MatchId, (u32, u32))>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl ResultProvider for ScoreSheet {
    fn name(&self) -> &'static str {
        "score-sheet"
    }

    fn result_for(&mut self, fixture: &Match) -> Option<(u32, u32)> {
        self.scores.get(&fixture.id).copied()
    }
}
