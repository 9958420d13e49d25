//! Return fixtures for a two-leg season.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, Utc};

use super::ScheduleOptions;
use crate::models::{Match, Round, Team, TeamId};

/// Shift `date` forward by whole calendar months.
fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    date.checked_add_months(Months::new(months))
        .unwrap_or_else(|| date + Duration::days(i64::from(months) * 30))
}

/// Build the second half of a season from its first half.
///
/// Each fixture is replayed with home and away swapped, dated
/// `return_leg_offset_months` later, and renumbered after the last first-half
/// round. Venues follow the new home team. The input is left untouched.
pub fn mirror_fixtures(first_half: &[Round], teams: &[Team], options: &ScheduleOptions) -> Vec<Round> {
    let offset = first_half.len() as u32;
    let by_id: HashMap<&TeamId, &Team> = teams.iter().map(|t| (&t.id, t)).collect();

    first_half
        .iter()
        .map(|round| {
            let number = round.number + offset;
            let matches = round
                .matches
                .iter()
                .enumerate()
                .map(|(slot, first_leg)| {
                    let home = by_id.get(&first_leg.away_team_id).copied();
                    let mut second_leg = Match::new(
                        &first_leg.competition(),
                        number,
                        slot,
                        first_leg.away_team_id.clone(),
                        first_leg.home_team_id.clone(),
                        add_months(first_leg.scheduled_at, options.return_leg_offset_months),
                        options.venue_for(home),
                    );
                    second_leg.match_week = first_leg.match_week + offset;
                    second_leg
                })
                .collect();

            Round {
                number,
                matches,
                bye: round.bye.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchStatus, Sport};
    use crate::schedule::generate_round_robin_fixtures;
    use crate::schedule::test_support::teams;
    use chrono::TimeZone;

    #[test]
    fn test_mirror_swaps_sides_and_shifts() {
        let field = teams(4);
        let options = ScheduleOptions::default();
        let first = generate_round_robin_fixtures(&field, Sport::Football, &options);
        let second = mirror_fixtures(&first, &field, &options);

        assert_eq!(second.len(), first.len());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(b.number, a.number + 3);
            assert_eq!(a.len(), b.len());

            for (leg1, leg2) in a.matches.iter().zip(b.matches.iter()) {
                assert_eq!(leg2.home_team_id, leg1.away_team_id);
                assert_eq!(leg2.away_team_id, leg1.home_team_id);
                assert_eq!(leg2.scheduled_at, add_months(leg1.scheduled_at, 3));
                assert_eq!(leg2.round_number, leg1.round_number + 3);
                assert_eq!(leg2.match_week, leg1.match_week + 3);
                assert_eq!(leg2.status, MatchStatus::Scheduled);
                assert_ne!(leg2.id, leg1.id);
            }
        }
    }

    #[test]
    fn test_mirror_uses_new_home_venue() {
        let field = teams(2);
        let options = ScheduleOptions::default();
        let first = generate_round_robin_fixtures(&field, Sport::Football, &options);
        let second = mirror_fixtures(&first, &field, &options);

        assert_eq!(first[0].matches[0].venue, "A Ground");
        assert_eq!(second[0].matches[0].venue, "B Ground");
    }

    #[test]
    fn test_mirror_keeps_byes() {
        let field = teams(3);
        let options = ScheduleOptions::default();
        let first = generate_round_robin_fixtures(&field, Sport::Football, &options);
        let second = mirror_fixtures(&first, &field, &options);

        let first_byes: Vec<_> = first.iter().map(|r| r.bye.clone()).collect();
        let second_byes: Vec<_> = second.iter().map(|r| r.bye.clone()).collect();
        assert_eq!(first_byes, second_byes);
    }

    #[test]
    fn test_add_months_is_calendar_aware() {
        let date = Utc.with_ymd_and_hms(2025, 11, 30, 10, 0, 0).unwrap();
        assert_eq!(add_months(date, 3), Utc.with_ymd_and_hms(2026, 2, 28, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_mirror_empty() {
        assert!(mirror_fixtures(&[], &[], &ScheduleOptions::default()).is_empty());
    }
}
