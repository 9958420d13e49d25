//! Team model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CommunityId, TeamId, ValidationError};

/// Sports played in the community leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Cricket,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Cricket => "cricket",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "football" => Ok(Sport::Football),
            "cricket" => Ok(Sport::Cricket),
            other => Err(ValidationError::UnknownSport(other.to_string())),
        }
    }
}

/// What kind of institution fields the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    Mosque,
    Madrassah,
}

impl fmt::Display for TeamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamKind::Mosque => write!(f, "mosque"),
            TeamKind::Madrassah => write!(f, "madrassah"),
        }
    }
}

impl FromStr for TeamKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mosque" => Ok(TeamKind::Mosque),
            "madrassah" => Ok(TeamKind::Madrassah),
            other => Err(ValidationError::UnknownTeamKind(other.to_string())),
        }
    }
}

/// A mosque or madrassah side competing in one sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,

    /// Display name
    pub name: String,

    pub kind: TeamKind,

    pub sport: Sport,

    /// Masjid or madrassah that owns the team
    pub community_id: CommunityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Home ground, used as the venue for home fixtures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_venue: Option<String>,

    pub founded_year: u16,

    /// Inactive teams are left out of schedule generation
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Team {
    /// Create an active team with no contact details or home venue.
    pub fn new(
        id: impl Into<TeamId>,
        name: impl Into<String>,
        kind: TeamKind,
        sport: Sport,
        community_id: impl Into<CommunityId>,
        founded_year: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            sport,
            community_id: community_id.into(),
            contact_email: None,
            contact_phone: None,
            home_venue: None,
            founded_year,
            is_active: true,
        }
    }

    /// Builder method to set the home ground.
    pub fn with_home_venue(mut self, venue: impl Into<String>) -> Self {
        self.home_venue = Some(venue.into());
        self
    }

    /// Builder method to set contact details.
    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.contact_email = email;
        self.contact_phone = phone;
        self
    }

    /// Builder method to mark the team inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the team takes part in a schedule for `sport`.
    pub fn is_eligible_for(&self, sport: Sport) -> bool {
        self.is_active && self.sport == sport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team::new(
            "elm-fc",
            "East London Masjid FC",
            TeamKind::Mosque,
            Sport::Football,
            "elm",
            1985,
        )
    }

    #[test]
    fn test_team_creation() {
        let team = team();
        assert_eq!(team.id.as_str(), "elm-fc");
        assert!(team.is_active);
        assert!(team.home_venue.is_none());
    }

    #[test]
    fn test_team_builder() {
        let team = team()
            .with_home_venue("Mile End Stadium")
            .with_contact(Some("sports@elm.org".to_string()), None);

        assert_eq!(team.home_venue.as_deref(), Some("Mile End Stadium"));
        assert_eq!(team.contact_email.as_deref(), Some("sports@elm.org"));
        assert!(team.contact_phone.is_none());
    }

    #[test]
    fn test_eligibility() {
        assert!(team().is_eligible_for(Sport::Football));
        assert!(!team().is_eligible_for(Sport::Cricket));
        assert!(!team().inactive().is_eligible_for(Sport::Football));
    }

    #[test]
    fn test_sport_parse_and_display() {
        assert_eq!("Football".parse::<Sport>().unwrap(), Sport::Football);
        assert_eq!(" cricket ".parse::<Sport>().unwrap(), Sport::Cricket);
        assert_eq!(
            "hockey".parse::<Sport>(),
            Err(ValidationError::UnknownSport("hockey".to_string()))
        );
        assert_eq!(format!("{}", Sport::Cricket), "cricket");
    }

    #[test]
    fn test_team_kind_parse() {
        assert_eq!("madrassah".parse::<TeamKind>().unwrap(), TeamKind::Madrassah);
        assert!("school".parse::<TeamKind>().is_err());
    }

    #[test]
    fn test_team_deserialize_defaults_active() {
        let json = r#"{
            "id": "t1",
            "name": "Green Lane Juniors",
            "kind": "madrassah",
            "sport": "cricket",
            "community_id": "green-lane",
            "founded_year": 2004
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();

        assert!(team.is_active);
        assert_eq!(team.kind, TeamKind::Madrassah);
        assert_eq!(team.sport, Sport::Cricket);
    }
}
