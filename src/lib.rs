//! # Mosque Leagues
//!
//! Fixture generation and league tables for mosque and madrassah sports leagues.
//!
//! ## Architecture
//!
//! - **models**: Teams, matches, rounds and table rows
//! - **schedule**: Round-robin fixture generation and return legs
//! - **results**: Where final scores come from
//! - **filters**: Upcoming / completed views of a schedule
//! - **calculate**: League tables and the charity ranking
//! - **league**: Accessors over a team pool
//! - **data**: Built-in sample pool and published tables
//! - **storage**: JSONL team pools and fixture exports
//! - **config**: Configuration loading and validation
//!
//! Everything outside `storage` and `config` is pure: inputs are borrowed,
//! results are freshly built, and nothing is cached between calls.

pub mod calculate;
pub mod config;
pub mod data;
pub mod filters;
pub mod league;
pub mod models;
pub mod results;
pub mod schedule;
pub mod storage;

pub use models::*;
