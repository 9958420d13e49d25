//! Convenience accessors over a team pool.
//!
//! Nothing here is cached: each call filters the pool, regenerates the
//! schedule and derives its answer from that.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::calculate::{calculate_league_table, rank_charity_standings};
use crate::data;
use crate::filters::{completed_fixtures, upcoming_fixtures};
use crate::models::{CharityStanding, Match, Round, Sport, Standing, Team, TeamId};
use crate::results::ResultProvider;
use crate::schedule::{generate_full_season_fixtures, generate_round_robin_fixtures, ScheduleOptions};

/// The league's team pool plus its published tables.
#[derive(Debug, Clone)]
pub struct LeagueService {
    teams: Vec<Team>,
    published_standings: Vec<Standing>,
    charity: Vec<CharityStanding>,
    options: ScheduleOptions,
    double_round_robin: bool,
}

impl LeagueService {
    /// A service over `teams` with no published tables.
    pub fn new(teams: Vec<Team>, options: ScheduleOptions) -> Self {
        Self {
            teams,
            published_standings: Vec::new(),
            charity: Vec::new(),
            options,
            double_round_robin: false,
        }
    }

    /// A service over the built-in sample pool and tables.
    pub fn with_sample_data(options: ScheduleOptions) -> Self {
        Self::new(data::sample_teams(), options)
            .with_published_standings(data::sample_sports_standings())
            .with_charity_standings(data::sample_charity_standings())
    }

    /// Builder method to set the precomputed sports tables.
    pub fn with_published_standings(mut self, standings: Vec<Standing>) -> Self {
        self.published_standings = standings;
        self
    }

    /// Builder method to set the charity totals.
    pub fn with_charity_standings(mut self, charity: Vec<CharityStanding>) -> Self {
        self.charity = charity;
        self
    }

    /// Builder method to schedule home and away legs instead of a single round robin.
    pub fn with_double_round_robin(mut self, enabled: bool) -> Self {
        self.double_round_robin = enabled;
        self
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    /// Active teams playing `sport`, in pool order.
    pub fn teams_by_sport(&self, sport: Sport) -> Vec<Team> {
        self.teams
            .iter()
            .filter(|t| t.is_eligible_for(sport))
            .cloned()
            .collect()
    }

    /// The full schedule for `sport`, regenerated.
    pub fn schedule(&self, sport: Sport) -> Vec<Round> {
        let teams = self.teams_by_sport(sport);
        debug!(
            "Generating {} schedule for {} teams (double round robin: {})",
            sport,
            teams.len(),
            self.double_round_robin
        );

        if self.double_round_robin {
            generate_full_season_fixtures(&teams, sport, &self.options)
        } else {
            generate_round_robin_fixtures(&teams, sport, &self.options)
        }
    }

    pub fn upcoming_fixtures(&self, sport: Sport, limit: usize) -> Vec<Match> {
        self.upcoming_fixtures_at(sport, limit, Utc::now())
    }

    pub fn upcoming_fixtures_at(&self, sport: Sport, limit: usize, now: DateTime<Utc>) -> Vec<Match> {
        upcoming_fixtures(&self.schedule(sport), now, limit)
    }

    pub fn completed_fixtures(
        &self,
        sport: Sport,
        limit: usize,
        results: &mut dyn ResultProvider,
    ) -> Vec<Match> {
        self.completed_fixtures_at(sport, limit, Utc::now(), results)
    }

    pub fn completed_fixtures_at(
        &self,
        sport: Sport,
        limit: usize,
        now: DateTime<Utc>,
        results: &mut dyn ResultProvider,
    ) -> Vec<Match> {
        completed_fixtures(&self.schedule(sport), now, limit, results)
    }

    /// A table derived from every match played before `now`.
    ///
    /// Independent of [`LeagueService::sports_standings_by_sport`], which
    /// returns the published table.
    pub fn derived_league_table_at(
        &self,
        sport: Sport,
        now: DateTime<Utc>,
        results: &mut dyn ResultProvider,
    ) -> Vec<Standing> {
        let played = self.completed_fixtures_at(sport, usize::MAX, now, results);
        calculate_league_table(&played, &self.teams_by_sport(sport))
    }

    /// The published table for `sport`, in position order.
    pub fn sports_standings_by_sport(&self, sport: Sport) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .published_standings
            .iter()
            .filter(|s| s.sport == sport)
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.position);
        rows
    }

    /// Communities ranked by funds raised.
    pub fn charity_standings(&self) -> Vec<CharityStanding> {
        rank_charity_standings(&self.charity)
    }

    /// Matches in round `round` of the `sport` schedule; empty if there is no such round.
    pub fn fixtures_by_round(&self, sport: Sport, round: u32) -> Vec<Match> {
        self.schedule(sport)
            .into_iter()
            .find(|r| r.number == round)
            .map(|r| r.matches)
            .unwrap_or_default()
    }

    /// Round numbers of the `sport` schedule, ascending.
    pub fn all_rounds(&self, sport: Sport) -> Vec<u32> {
        self.schedule(sport).iter().map(|r| r.number).collect()
    }

    /// Every scheduled match involving `team_id`, in schedule order.
    pub fn fixtures_for_team(&self, sport: Sport, team_id: &TeamId) -> Vec<Match> {
        self.schedule(sport)
            .into_iter()
            .flat_map(|r| r.matches)
            .filter(|m| m.involves(team_id))
            .collect()
    }
}
