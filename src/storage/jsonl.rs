//! JSONL (JSON Lines) files.
//!
//! Each line is a valid JSON object representing one record.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::StorageError;
use crate::models::{Match, Round, Team};

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write records, replacing the entire file.
    pub fn write_all<'a, I>(&self, records: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} records to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all records. Unparseable lines are logged and skipped; a missing
    /// file reads as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }
}

/// Load a team pool. Unlike [`JsonlReader::read_all`], the file must exist.
pub fn read_teams(path: &Path) -> Result<Vec<Team>, StorageError> {
    let reader: JsonlReader<Team> = JsonlReader::new(path.to_path_buf());
    if !reader.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }
    reader.read_all()
}

/// Save every match of a schedule, one per line, in schedule order.
pub fn write_fixtures(path: &Path, schedule: &[Round]) -> Result<usize, StorageError> {
    let writer: JsonlWriter<Match> = JsonlWriter::new(path.to_path_buf());
    writer.write_all(schedule.iter().flat_map(|r| r.matches.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sport;
    use crate::schedule::test_support::teams;
    use crate::schedule::{generate_round_robin_fixtures, ScheduleOptions};
    use tempfile::TempDir;

    #[test]
    fn test_teams_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("teams.jsonl");
        let pool = teams(3);

        let writer: JsonlWriter<Team> = JsonlWriter::new(path.clone());
        assert_eq!(writer.write_all(&pool).unwrap(), 3);

        let read = read_teams(&path).unwrap();
        assert_eq!(read, pool);
    }

    #[test]
    fn test_read_teams_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.jsonl");

        assert!(matches!(read_teams(&path), Err(StorageError::PathNotFound(_))));
    }

    #[test]
    fn test_read_all_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let reader: JsonlReader<Team> = JsonlReader::new(temp_dir.path().join("nope.jsonl"));

        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("teams.jsonl");
        let good = serde_json::to_string(&teams(1)[0]).unwrap();
        fs::write(&path, format!("{}\n\nnot json\n{{\"id\": 1}}\n", good)).unwrap();

        let read = read_teams(&path).unwrap();
        assert_eq!(read.len(), 1);
    }

    #[test]
    fn test_write_fixtures_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports").join("football-2025-26.jsonl");
        let schedule = generate_round_robin_fixtures(&teams(4), Sport::Football, &ScheduleOptions::default());

        assert_eq!(write_fixtures(&path, &schedule).unwrap(), 6);

        let reader: JsonlReader<Match> = JsonlReader::new(path);
        let matches = reader.read_all().unwrap();
        assert_eq!(matches.len(), 6);
        assert_eq!(matches[0], schedule[0].matches[0]);
    }
}
