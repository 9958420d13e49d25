//! Match and round models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{EntityId, MatchId, Sport, TeamId, ValidationError};

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Postponed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::Completed => write!(f, "completed"),
            MatchStatus::Cancelled => write!(f, "cancelled"),
            MatchStatus::Postponed => write!(f, "postponed"),
        }
    }
}

impl FromStr for MatchStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "completed" => Ok(MatchStatus::Completed),
            "cancelled" => Ok(MatchStatus::Cancelled),
            "postponed" => Ok(MatchStatus::Postponed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Result of a completed match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// The league a match or table belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Competition {
    pub sport: Sport,
    pub division: String,
    pub season: String,
}

impl Competition {
    pub fn new(sport: Sport, division: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            sport,
            division: division.into(),
            season: season.into(),
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.sport, self.division, self.season)
    }
}

/// One fixture between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,

    pub home_team_id: TeamId,

    pub away_team_id: TeamId,

    pub sport: Sport,

    pub scheduled_at: DateTime<Utc>,

    pub venue: String,

    #[serde(default)]
    pub status: MatchStatus,

    /// Season label, e.g. "2025-26"
    pub season: String,

    pub division: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,

    pub round_number: u32,

    /// Currently always equal to `round_number`
    pub match_week: u32,

    #[serde(default)]
    pub charity_raised: f64,
}

impl Match {
    /// Create a scheduled match. The ID is derived from the competition,
    /// round, slot within the round and both team IDs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        competition: &Competition,
        round_number: u32,
        slot: usize,
        home_team_id: TeamId,
        away_team_id: TeamId,
        scheduled_at: DateTime<Utc>,
        venue: String,
    ) -> Self {
        let id = EntityId::generate(&[
            &competition.season,
            competition.sport.as_str(),
            &competition.division,
            &round_number.to_string(),
            &slot.to_string(),
            home_team_id.as_str(),
            away_team_id.as_str(),
        ]);

        Self {
            id,
            home_team_id,
            away_team_id,
            sport: competition.sport,
            scheduled_at,
            venue,
            status: MatchStatus::Scheduled,
            season: competition.season.clone(),
            division: competition.division.clone(),
            home_score: None,
            away_score: None,
            round_number,
            match_week: round_number,
            charity_raised: 0.0,
        }
    }

    /// Builder method to record a final score, marking the match completed.
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self.status = MatchStatus::Completed;
        self
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set funds raised at the match.
    pub fn with_charity_raised(mut self, amount: f64) -> Self {
        self.charity_raised = amount;
        self
    }

    pub fn competition(&self) -> Competition {
        Competition::new(self.sport, self.division.clone(), self.season.clone())
    }

    pub fn involves(&self, team_id: &TeamId) -> bool {
        &self.home_team_id == team_id || &self.away_team_id == team_id
    }

    /// Both scores, when the match is completed and fully scored.
    pub fn score(&self) -> Option<(u32, u32)> {
        if self.status != MatchStatus::Completed {
            return None;
        }
        self.home_score.zip(self.away_score)
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.score().map(|(home, away)| match home.cmp(&away) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        })
    }

    /// Check the shape invariants of the record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.home_team_id == self.away_team_id {
            return Err(ValidationError::SelfMatch(self.id.clone()));
        }

        if self.home_score.is_some() != self.away_score.is_some() {
            return Err(ValidationError::PartialScore(self.id.clone()));
        }

        if self.status == MatchStatus::Completed && self.home_score.is_none() {
            return Err(ValidationError::MissingScore(self.id.clone()));
        }

        Ok(())
    }
}

/// The matches that share a round number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,

    pub matches: Vec<Match>,

    /// Team sitting the round out when the team count is odd
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bye: Option<TeamId>,
}

impl Round {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            matches: Vec::new(),
            bye: None,
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
