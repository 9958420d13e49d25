//! League table and charity ranking calculation.
//!
//! Tables are derived from scratch on every call:
//! - only completed, fully scored matches count
//! - win 3, draw 1, loss 0
//! - ordered by points, then goal difference, then goals scored
//! - remaining ties keep the order the teams were supplied in

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{CharityStanding, Competition, Match, Standing, Team, TeamId};
use crate::schedule::{DEFAULT_DIVISION, DEFAULT_SEASON};

/// A ranked table for one competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub competition: Competition,
    pub standings: Vec<Standing>,
}

/// Fold completed matches into a ranked table covering every team in `teams`.
///
/// Rows are labelled with the competition of the first match, or with the
/// default division and season for the first team's sport when there are no
/// matches. Matches that reference a team not in `teams` are skipped.
pub fn calculate_league_table(matches: &[Match], teams: &[Team]) -> Vec<Standing> {
    let competition = match (matches.first(), teams.first()) {
        (Some(m), _) => m.competition(),
        (None, Some(t)) => Competition::new(t.sport, DEFAULT_DIVISION, DEFAULT_SEASON),
        (None, None) => return Vec::new(),
    };

    fold_table(&competition, matches.iter(), teams)
}

/// One table per competition found in `matches`, each covering the teams of
/// that competition's sport. Tables come back in competition order.
pub fn calculate_league_tables(matches: &[Match], teams: &[Team]) -> Vec<LeagueTable> {
    let mut grouped: BTreeMap<Competition, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        grouped.entry(m.competition()).or_default().push(m);
    }

    grouped
        .into_iter()
        .map(|(competition, matches)| {
            let field: Vec<Team> = teams
                .iter()
                .filter(|t| t.sport == competition.sport)
                .cloned()
                .collect();
            let standings = fold_table(&competition, matches.into_iter(), &field);
            LeagueTable {
                competition,
                standings,
            }
        })
        .collect()
}

fn fold_table<'a>(
    competition: &Competition,
    matches: impl Iterator<Item = &'a Match>,
    teams: &[Team],
) -> Vec<Standing> {
    let mut table: Vec<Standing> = teams
        .iter()
        .map(|t| Standing::new(t, competition))
        .collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.clone(), i))
        .collect();

    for m in matches {
        let Some((home_goals, away_goals)) = m.score() else {
            continue;
        };

        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            warn!(
                "Skipping match {}: {} v {} references an unknown team",
                m.id, m.home_team_id, m.away_team_id
            );
            continue;
        };

        if home == away {
            warn!("Skipping match {}: team {} plays itself", m.id, m.home_team_id);
            continue;
        }

        table[home].record(home_goals, away_goals);
        table[away].record(away_goals, home_goals);
    }

    // sort_by is stable, so full ties keep input order
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    for (i, row) in table.iter_mut().enumerate() {
        row.position = i as u32 + 1;
    }

    table
}

/// Rank communities by funds raised, highest first, assigning positions.
pub fn rank_charity_standings(standings: &[CharityStanding]) -> Vec<CharityStanding> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(|a, b| b.total_raised.total_cmp(&a.total_raised));

    for (i, row) in ranked.iter_mut().enumerate() {
        row.position = i as u32 + 1;
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchStatus, Sport, TeamKind};
    use crate::results::RandomResults;
    use crate::filters::completed_fixtures;
    use crate::schedule::test_support::teams;
    use crate::schedule::{generate_full_season_fixtures, ScheduleOptions};
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn competition() -> Competition {
        Competition::new(Sport::Football, DEFAULT_DIVISION, DEFAULT_SEASON)
    }

    fn result(home: &str, away: &str, home_goals: u32, away_goals: u32) -> Match {
        Match::new(
            &competition(),
            1,
            0,
            TeamId::from(home),
            TeamId::from(away),
            Utc.with_ymd_and_hms(2025, 9, 6, 10, 0, 0).unwrap(),
            "Ground".to_string(),
        )
        .with_score(home_goals, away_goals)
    }

    fn summary(table: &[Standing]) -> Vec<(&str, u32, u32, i64)> {
        table
            .iter()
            .map(|s| (s.team_id.as_str(), s.position, s.points, s.goal_difference))
            .collect()
    }

    #[test]
    fn test_four_team_example() {
        let matches = vec![
            result("team-a", "team-b", 2, 1),
            result("team-c", "team-d", 0, 0),
            result("team-a", "team-c", 3, 0),
            result("team-b", "team-d", 1, 1),
            result("team-a", "team-d", 1, 0),
            result("team-b", "team-c", 2, 0),
        ];

        let table = calculate_league_table(&matches, &teams(4));

        assert_eq!(
            summary(&table),
            vec![
                ("team-a", 1, 9, 5),
                ("team-b", 2, 4, 1),
                ("team-d", 3, 2, -1),
                ("team-c", 4, 1, -5),
            ]
        );

        let a = &table[0];
        assert_eq!((a.wins, a.draws, a.losses), (3, 0, 0));
        assert_eq!((a.goals_for, a.goals_against), (6, 1));
        assert_eq!(a.form, "WWW");

        let b = &table[1];
        assert_eq!((b.wins, b.draws, b.losses), (1, 1, 1));
        assert_eq!((b.goals_for, b.goals_against), (4, 3));
        assert_eq!(b.form, "LDW");
    }

    #[test]
    fn test_zero_match_teams_are_listed() {
        let table = calculate_league_table(&[result("team-a", "team-b", 1, 0)], &teams(4));

        assert_eq!(table.len(), 4);
        let idle: Vec<_> = table.iter().filter(|s| s.matches_played == 0).collect();
        assert_eq!(idle.len(), 2);
        assert!(idle.iter().all(|s| s.points == 0 && s.form.is_empty()));
    }

    #[test]
    fn test_only_completed_matches_count() {
        let mut scheduled = result("team-a", "team-b", 5, 0);
        scheduled.status = MatchStatus::Scheduled;
        let postponed = result("team-a", "team-b", 5, 0).with_status(MatchStatus::Postponed);
        let mut unscored = result("team-a", "team-b", 0, 0);
        unscored.home_score = None;
        unscored.away_score = None;

        let table = calculate_league_table(&[scheduled, postponed, unscored], &teams(2));

        assert!(table.iter().all(|s| s.matches_played == 0));
    }

    #[test]
    fn test_unknown_team_is_skipped() {
        let matches = vec![
            result("team-a", "stranger", 4, 0),
            result("team-a", "team-b", 0, 1),
        ];

        let table = calculate_league_table(&matches, &teams(2));

        assert_eq!(summary(&table), vec![("team-b", 1, 3, 1), ("team-a", 2, 0, -1)]);
    }

    #[test]
    fn test_goal_difference_breaks_points_tie() {
        let matches = vec![
            result("team-a", "team-c", 1, 0),
            result("team-b", "team-c", 4, 0),
        ];

        let table = calculate_league_table(&matches, &teams(3));

        assert_eq!(table[0].team_id.as_str(), "team-b");
        assert_eq!(table[1].team_id.as_str(), "team-a");
    }

    #[test]
    fn test_goals_scored_breaks_goal_difference_tie() {
        let matches = vec![
            result("team-a", "team-c", 1, 0),
            result("team-b", "team-d", 3, 2),
        ];

        let table = calculate_league_table(&matches, &teams(4));

        assert_eq!(table[0].team_id.as_str(), "team-b");
        assert_eq!(table[1].team_id.as_str(), "team-a");
    }

    #[test]
    fn test_full_ties_keep_input_order_with_consecutive_positions() {
        let table = calculate_league_table(&[], &teams(3));

        assert_eq!(
            summary(&table),
            vec![("team-a", 1, 0, 0), ("team-b", 2, 0, 0), ("team-c", 3, 0, 0)]
        );
    }

    #[test]
    fn test_table_invariants_over_a_season() {
        let field = teams(7);
        let options = ScheduleOptions::default();
        let schedule = generate_full_season_fixtures(&field, Sport::Football, &options);
        let now = options.season_start + Duration::days(3650);
        let played = completed_fixtures(&schedule, now, usize::MAX, &mut RandomResults::seeded(2024));

        let table = calculate_league_table(&played, &field);

        let wins: u32 = table.iter().map(|s| s.wins).sum();
        let losses: u32 = table.iter().map(|s| s.losses).sum();
        let draws: u32 = table.iter().map(|s| s.draws).sum();
        assert_eq!(wins, losses);
        assert_eq!(draws % 2, 0);

        for row in &table {
            assert_eq!(row.points, 3 * row.wins + row.draws);
            assert_eq!(row.goal_difference, row.goals_for as i64 - row.goals_against as i64);
            assert_eq!(row.matches_played, 12);
        }

        let goals_for: u32 = table.iter().map(|s| s.goals_for).sum();
        let goals_against: u32 = table.iter().map(|s| s.goals_against).sum();
        assert_eq!(goals_for, goals_against);
    }

    #[test]
    fn test_table_is_idempotent() {
        let field = teams(6);
        let options = ScheduleOptions::default();
        let schedule = generate_full_season_fixtures(&field, Sport::Football, &options);
        let now = options.season_start + Duration::days(3650);
        let played = completed_fixtures(&schedule, now, usize::MAX, &mut RandomResults::seeded(9));

        assert_eq!(
            calculate_league_table(&played, &field),
            calculate_league_table(&played, &field)
        );
    }

    #[test]
    fn test_rows_carry_competition_labels() {
        let table = calculate_league_table(&[result("team-a", "team-b", 0, 2)], &teams(2));

        assert!(table
            .iter()
            .all(|s| s.season == DEFAULT_SEASON && s.division == DEFAULT_DIVISION && s.sport == Sport::Football));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(calculate_league_table(&[], &[]).is_empty());
    }

    #[test]
    fn test_tables_per_competition() {
        let mut field = teams(2);
        field.push(Team::new("c1", "Cricket One", TeamKind::Madrassah, Sport::Cricket, "x", 2000));
        field.push(Team::new("c2", "Cricket Two", TeamKind::Madrassah, Sport::Cricket, "y", 2001));

        let cricket = Competition::new(Sport::Cricket, "Twenty20", DEFAULT_SEASON);
        let cricket_match = Match::new(
            &cricket,
            1,
            0,
            TeamId::from("c2"),
            TeamId::from("c1"),
            Utc.with_ymd_and_hms(2025, 9, 7, 10, 0, 0).unwrap(),
            "Oval".to_string(),
        )
        .with_score(150, 120);

        let tables = calculate_league_tables(
            &[result("team-a", "team-b", 1, 1), cricket_match],
            &field,
        );

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].competition.sport, Sport::Football);
        assert_eq!(tables[0].standings.len(), 2);
        assert!(tables[0].standings.iter().all(|s| s.points == 1));

        assert_eq!(tables[1].competition, cricket);
        assert_eq!(tables[1].standings[0].team_id.as_str(), "c2");
        assert_eq!(tables[1].standings[0].division, "Twenty20");
    }

    #[test]
    fn test_rank_charity_standings() {
        let input = vec![
            CharityStanding::new("a", "Alpha Masjid", 1_200.0),
            CharityStanding::new("b", "Bravo Madrassah", 9_800.5),
            CharityStanding::new("c", "Charlie Masjid", 1_200.0),
            CharityStanding::new("d", "Delta Masjid", 4_000.0),
        ];

        let ranked = rank_charity_standings(&input);

        let order: Vec<(&str, u32)> = ranked
            .iter()
            .map(|c| (c.community_id.as_str(), c.position))
            .collect();
        assert_eq!(order, vec![("b", 1), ("d", 2), ("a", 3), ("c", 4)]);
        // Input untouched
        assert!(input.iter().all(|c| c.position == 0));
    }
}
