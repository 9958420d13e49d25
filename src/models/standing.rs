//! League table rows.

use serde::{Deserialize, Serialize};

use super::{CommunityId, Competition, Sport, Team, TeamId};

/// Points for a win.
pub const POINTS_FOR_WIN: u32 = 3;

/// Points for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// How many results the form string keeps.
pub const FORM_LENGTH: usize = 5;

/// A team's row in a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,

    pub team_name: String,

    pub sport: Sport,

    pub division: String,

    pub season: String,

    pub matches_played: u32,

    pub wins: u32,

    pub draws: u32,

    pub losses: u32,

    pub goals_for: u32,

    pub goals_against: u32,

    pub goal_difference: i64,

    pub points: u32,

    /// 1-based rank, assigned once the table is sorted
    pub position: u32,

    /// Most recent results, oldest first (e.g. "WWDLW")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub form: String,
}

impl Standing {
    /// An all-zero row for `team`.
    pub fn new(team: &Team, competition: &Competition) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            sport: competition.sport,
            division: competition.division.clone(),
            season: competition.season.clone(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
            form: String::new(),
        }
    }

    /// Fold one result into the row.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.matches_played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        let letter = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
                'W'
            }
            std::cmp::Ordering::Less => {
                self.losses += 1;
                'L'
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
                'D'
            }
        };

        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.push_form(letter);
    }

    fn push_form(&mut self, letter: char) {
        self.form.push(letter);
        if self.form.len() > FORM_LENGTH {
            self.form.remove(0);
        }
    }
}

/// A community ranked by funds raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharityStanding {
    pub community_id: CommunityId,

    pub community_name: String,

    pub total_raised: f64,

    #[serde(default)]
    pub donor_count: u32,

    #[serde(default)]
    pub position: u32,
}

impl CharityStanding {
    pub fn new(
        community_id: impl Into<CommunityId>,
        community_name: impl Into<String>,
        total_raised: f64,
    ) -> Self {
        Self {
            community_id: community_id.into(),
            community_name: community_name.into(),
            total_raised,
            donor_count: 0,
            position: 0,
        }
    }

    /// Builder method to set the donor count.
    pub fn with_donor_count(mut self, donors: u32) -> Self {
        self.donor_count = donors;
        self
    }
}
