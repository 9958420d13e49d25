//! Validation errors for league records.

use thiserror::Error;

use super::MatchId;

/// Errors raised when a record breaks one of its shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Match {0} has the same team on both sides")]
    SelfMatch(MatchId),

    #[error("Match {0} has only one of its two scores")]
    PartialScore(MatchId),

    #[error("Match {0} is completed but has no score")]
    MissingScore(MatchId),

    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error("Unknown team kind: {0}")]
    UnknownTeamKind(String),

    #[error("Unknown match status: {0}")]
    UnknownStatus(String),
}
