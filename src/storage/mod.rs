//! Team pool files and fixture exports.
//!
//! The core never touches the filesystem. This module is for callers that
//! keep their team pool in a file or want to save a generated schedule:
//! - `teams.jsonl`: the team pool, one team per line
//! - `exports/`: generated fixtures, one match per line

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join("teams.jsonl")
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }

    /// Export file for one competition, e.g. `exports/football-2025-26.jsonl`.
    pub fn fixtures_export_path(&self, sport: &str, season: &str) -> PathBuf {
        self.exports_dir().join(format!("{}-{}.jsonl", sport, season))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
