//! Round-robin fixture generation.
//!
//! Schedules are built with the circle method: teams sit in a ring of slots,
//! slot `i` plays slot `n - 1 - i`, and after every round the first slot stays
//! put while the last slot moves to index 1. An odd field gets one empty slot;
//! whoever is drawn against it sits the round out.

mod mirror;

pub use mirror::*;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Competition, Match, Round, Sport, Team};

/// Season label used when none is configured.
pub const DEFAULT_SEASON: &str = "2025-26";

/// Division label used when none is configured.
pub const DEFAULT_DIVISION: &str = "Premier Division";

/// Venue used when the home team has no recorded ground.
pub const DEFAULT_VENUE: &str = "Venue TBC";

/// Rounds are played a week apart.
pub const DAYS_BETWEEN_ROUNDS: i64 = 7;

/// Matches within a round are staggered.
pub const DAYS_BETWEEN_MATCHES: i64 = 2;

/// Return fixtures start this many months after their first leg.
pub const DEFAULT_RETURN_LEG_OFFSET_MONTHS: u32 = 3;

/// Inputs to the generator that are not part of the team list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Kick-off of the first match of round 1
    pub season_start: DateTime<Utc>,

    pub season: String,

    pub division: String,

    pub default_venue: String,

    pub return_leg_offset_months: u32,
}

/// First Saturday of September 2025, 10:00 UTC.
pub fn default_season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 6, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            season_start: default_season_start(),
            season: DEFAULT_SEASON.to_string(),
            division: DEFAULT_DIVISION.to_string(),
            default_venue: DEFAULT_VENUE.to_string(),
            return_leg_offset_months: DEFAULT_RETURN_LEG_OFFSET_MONTHS,
        }
    }
}

impl ScheduleOptions {
    pub fn new(season_start: DateTime<Utc>) -> Self {
        Self {
            season_start,
            ..Default::default()
        }
    }

    /// Builder method to set the season label.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Builder method to set the division label.
    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = division.into();
        self
    }

    /// Builder method to set the fallback venue.
    pub fn with_default_venue(mut self, venue: impl Into<String>) -> Self {
        self.default_venue = venue.into();
        self
    }

    pub fn competition(&self, sport: Sport) -> Competition {
        Competition::new(sport, self.division.clone(), self.season.clone())
    }

    /// Kick-off for the `slot`-th match of the round at `round_index` (both 0-based).
    pub fn match_date(&self, round_index: usize, slot: usize) -> DateTime<Utc> {
        let days = round_index as i64 * DAYS_BETWEEN_ROUNDS + slot as i64 * DAYS_BETWEEN_MATCHES;
        self.season_start + Duration::days(days)
    }

    /// The home team's ground, or the fallback venue.
    pub fn venue_for(&self, home: Option<&Team>) -> String {
        home.and_then(|t| t.home_venue.clone())
            .unwrap_or_else(|| self.default_venue.clone())
    }
}

/// Generate a single round robin for the active `sport` teams in `teams`.
///
/// Every pair of teams meets exactly once over `n - 1` rounds (`n` rounded up
/// to even). Fewer than two eligible teams yields an empty schedule. Team order
/// matters: the same ordered input always produces the same schedule.
pub fn generate_round_robin_fixtures(
    teams: &[Team],
    sport: Sport,
    options: &ScheduleOptions,
) -> Vec<Round> {
    let mut slots: Vec<Option<&Team>> = teams
        .iter()
        .filter(|t| t.is_eligible_for(sport))
        .map(Some)
        .collect();

    if slots.len() < 2 {
        debug!(
            "Not enough {} teams to schedule ({} eligible)",
            sport,
            slots.len()
        );
        return Vec::new();
    }

    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let competition = options.competition(sport);
    let slot_count = slots.len();
    let mut rounds = Vec::with_capacity(slot_count - 1);

    for round_index in 0..slot_count - 1 {
        let number = round_index as u32 + 1;
        let mut round = Round::new(number);

        for i in 0..slot_count / 2 {
            match (slots[i], slots[slot_count - 1 - i]) {
                (Some(home), Some(away)) => {
                    let slot = round.matches.len();
                    round.matches.push(Match::new(
                        &competition,
                        number,
                        slot,
                        home.id.clone(),
                        away.id.clone(),
                        options.match_date(round_index, slot),
                        options.venue_for(Some(home)),
                    ));
                }
                (Some(idle), None) | (None, Some(idle)) => round.bye = Some(idle.id.clone()),
                (None, None) => {}
            }
        }

        rounds.push(round);

        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }

    debug!(
        "Generated {} rounds ({} matches) for {}",
        rounds.len(),
        rounds.iter().map(Round::len).sum::<usize>(),
        competition
    );

    rounds
}

/// Generate both legs of a season: the single round robin followed by its
/// mirrored return fixtures.
pub fn generate_full_season_fixtures(
    teams: &[Team],
    sport: Sport,
    options: &ScheduleOptions,
) -> Vec<Round> {
    let first_half = generate_round_robin_fixtures(teams, sport, options);
    let second_half = mirror_fixtures(&first_half, teams, options);

    let mut rounds = first_half;
    rounds.extend(second_half);
    rounds
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Sport, Team, TeamKind};

    /// `count` active football teams named A, B, C...
    pub fn teams(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| {
                let letter = (b'A' + i as u8) as char;
                Team::new(
                    format!("team-{}", letter.to_ascii_lowercase()),
                    letter.to_string(),
                    TeamKind::Mosque,
                    Sport::Football,
                    format!("community-{}", i),
                    1990,
                )
                .with_home_venue(format!("{} Ground", letter))
            })
            .collect()
    }
}
