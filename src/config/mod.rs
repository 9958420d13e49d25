//! Configuration loading and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filters::DEFAULT_FIXTURE_LIMIT;
use crate::schedule::{
    default_season_start, ScheduleOptions, DEFAULT_DIVISION, DEFAULT_RETURN_LEG_OFFSET_MONTHS,
    DEFAULT_SEASON, DEFAULT_VENUE,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// League scheduling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_season")]
    pub season: String,

    #[serde(default = "default_division")]
    pub division: String,

    /// Kick-off of the first match of the season
    #[serde(default = "default_season_start")]
    pub season_start: DateTime<Utc>,

    /// Venue for home teams without a recorded ground
    #[serde(default = "default_venue")]
    pub default_venue: String,

    #[serde(default = "default_return_leg_offset_months")]
    pub return_leg_offset_months: u32,

    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,

    /// Schedule home and away legs
    #[serde(default)]
    pub double_round_robin: bool,
}

fn default_season() -> String {
    DEFAULT_SEASON.to_string()
}

fn default_division() -> String {
    DEFAULT_DIVISION.to_string()
}

fn default_venue() -> String {
    DEFAULT_VENUE.to_string()
}

fn default_return_leg_offset_months() -> u32 {
    DEFAULT_RETURN_LEG_OFFSET_MONTHS
}

fn default_upcoming_limit() -> usize {
    DEFAULT_FIXTURE_LIMIT
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            season: default_season(),
            division: default_division(),
            season_start: default_season_start(),
            default_venue: default_venue(),
            return_leg_offset_months: default_return_leg_offset_months(),
            upcoming_limit: default_upcoming_limit(),
            double_round_robin: false,
        }
    }
}

impl LeagueConfig {
    /// Generator options for this league.
    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            season_start: self.season_start,
            season: self.season.clone(),
            division: self.division.clone(),
            default_venue: self.default_venue.clone(),
            return_leg_offset_months: self.return_leg_offset_months,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub league: LeagueConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            league: LeagueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let league = &self.league;

        if league.season.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Season label must not be empty".to_string(),
            ));
        }

        if league.division.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Division label must not be empty".to_string(),
            ));
        }

        if league.default_venue.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Default venue must not be empty".to_string(),
            ));
        }

        if league.return_leg_offset_months == 0 {
            return Err(ConfigError::ValidationError(
                "Return leg offset must be at least one month".to_string(),
            ));
        }

        if league.upcoming_limit == 0 {
            return Err(ConfigError::ValidationError(
                "Upcoming fixture limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
