//! Splitting a schedule into upcoming and completed matches.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Match, MatchStatus, Round};
use crate::results::ResultProvider;

/// Default number of matches returned by the filters.
pub const DEFAULT_FIXTURE_LIMIT: usize = 10;

/// Scheduled matches kicking off after `now`, soonest first, at most `limit`.
pub fn upcoming_fixtures(schedule: &[Round], now: DateTime<Utc>, limit: usize) -> Vec<Match> {
    let mut upcoming: Vec<Match> = schedule
        .iter()
        .flat_map(|r| r.matches.iter())
        .filter(|m| m.status == MatchStatus::Scheduled && m.scheduled_at > now)
        .cloned()
        .collect();

    upcoming.sort_by_key(|m| m.scheduled_at);
    upcoming.truncate(limit);
    upcoming
}

/// Matches that kicked off before `now`, most recent first, at most `limit`.
///
/// Each match is marked completed with the score `results` gives it. Matches
/// the provider has no score for are left out.
pub fn completed_fixtures(
    schedule: &[Round],
    now: DateTime<Utc>,
    limit: usize,
    results: &mut dyn ResultProvider,
) -> Vec<Match> {
    let mut completed: Vec<Match> = Vec::new();
    let mut unscored = 0usize;

    for m in schedule.iter().flat_map(|r| r.matches.iter()) {
        if m.scheduled_at >= now {
            continue;
        }
        match results.result_for(m) {
            Some((home, away)) => completed.push(m.clone().with_score(home, away)),
            None => unscored += 1,
        }
    }

    if unscored > 0 {
        debug!(
            "{} past matches have no result from the {} provider",
            unscored,
            results.name()
        );
    }

    completed.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
    completed.truncate(limit);
    completed
}
