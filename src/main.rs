use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosque_leagues::config::AppConfig;
use mosque_leagues::data;
use mosque_leagues::league::LeagueService;
use mosque_leagues::models::{Sport, Standing, Team};
use mosque_leagues::results::{RandomResults, ResultProvider};
use mosque_leagues::storage::{read_teams, write_fixtures, StorageConfig};

#[derive(Parser)]
#[command(name = "mosque-leagues")]
#[command(about = "Fixtures and league tables for mosque and madrassah sports leagues")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Team pool file (JSONL). Falls back to <data-dir>/teams.jsonl, then the sample pool
    #[arg(long)]
    teams: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active teams for a sport
    Teams {
        #[arg(long, default_value = "football")]
        sport: Sport,
    },

    /// Print the generated schedule
    Fixtures {
        #[arg(long, default_value = "football")]
        sport: Sport,

        /// Include the return fixtures
        #[arg(long)]
        full_season: bool,

        /// Only this round
        #[arg(long)]
        round: Option<u32>,
    },

    /// List the round numbers of the schedule
    Rounds {
        #[arg(long, default_value = "football")]
        sport: Sport,
    },

    /// Next matches to be played
    Upcoming {
        #[arg(long, default_value = "football")]
        sport: Sport,

        /// Maximum matches to show (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Most recently played matches, with synthetic scores
    Completed {
        #[arg(long, default_value = "football")]
        sport: Sport,

        #[arg(long)]
        limit: Option<usize>,

        /// Seed for repeatable scores
        #[arg(long)]
        seed: Option<u64>,
    },

    /// League table derived from the synthetic results so far
    Table {
        #[arg(long, default_value = "football")]
        sport: Sport,

        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Published league table
    Standings {
        #[arg(long, default_value = "football")]
        sport: Sport,

        #[arg(long)]
        json: bool,
    },

    /// Communities ranked by funds raised
    Charity,

    /// Write the generated schedule to a JSONL file
    Export {
        #[arg(long, default_value = "football")]
        sport: Sport,

        #[arg(long)]
        full_season: bool,

        /// Output path (defaults to <data-dir>/exports/<sport>-<season>.jsonl)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))
        .with_context(|| format!("Failed to load config from {}", cli.config))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting mosque-leagues v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());
    let teams = load_teams(cli.teams.as_deref(), &storage)?;
    let service = LeagueService::new(teams, config.league.schedule_options())
        .with_published_standings(data::sample_sports_standings())
        .with_charity_standings(data::sample_charity_standings())
        .with_double_round_robin(config.league.double_round_robin);

    match cli.command {
        Commands::Teams { sport } => print_json(&service.teams_by_sport(sport))?,

        Commands::Fixtures {
            sport,
            full_season,
            round,
        } => {
            let service = service.with_double_round_robin(config.league.double_round_robin || full_season);
            match round {
                Some(number) => print_json(&service.fixtures_by_round(sport, number))?,
                None => print_json(&service.schedule(sport))?,
            }
        }

        Commands::Rounds { sport } => print_json(&service.all_rounds(sport))?,

        Commands::Upcoming { sport, limit } => {
            let limit = limit.unwrap_or(config.league.upcoming_limit);
            print_json(&service.upcoming_fixtures(sport, limit))?
        }

        Commands::Completed { sport, limit, seed } => {
            let limit = limit.unwrap_or(config.league.upcoming_limit);
            let mut results = result_provider(seed);
            print_json(&service.completed_fixtures(sport, limit, results.as_mut()))?
        }

        Commands::Table { sport, seed, json } => {
            let mut results = result_provider(seed);
            let table = service.derived_league_table_at(sport, chrono::Utc::now(), results.as_mut());
            if json {
                print_json(&table)?
            } else {
                print_table(&table)
            }
        }

        Commands::Standings { sport, json } => {
            let table = service.sports_standings_by_sport(sport);
            if json {
                print_json(&table)?
            } else {
                print_table(&table)
            }
        }

        Commands::Charity => print_json(&service.charity_standings())?,

        Commands::Export {
            sport,
            full_season,
            out,
        } => {
            let service = service.with_double_round_robin(config.league.double_round_robin || full_season);
            let path = out
                .map(PathBuf::from)
                .unwrap_or_else(|| storage.fixtures_export_path(sport.as_str(), &config.league.season));
            let count = write_fixtures(&path, &service.schedule(sport))
                .with_context(|| format!("Failed to write fixtures to {:?}", path))?;
            println!("Exported {} fixtures to {}", count, path.display());
        }
    }

    Ok(())
}

/// The explicit team file, else the data directory's pool, else the sample pool.
fn load_teams(explicit: Option<&str>, storage: &StorageConfig) -> Result<Vec<Team>> {
    if let Some(path) = explicit {
        let teams = read_teams(&PathBuf::from(path))
            .with_context(|| format!("Failed to load teams from {}", path))?;
        tracing::info!("Loaded {} teams from {}", teams.len(), path);
        return Ok(teams);
    }

    let default_path = storage.teams_path();
    if default_path.exists() {
        let teams = read_teams(&default_path)
            .with_context(|| format!("Failed to load teams from {:?}", default_path))?;
        tracing::info!("Loaded {} teams from {:?}", teams.len(), default_path);
        return Ok(teams);
    }

    tracing::info!("No team file found, using the sample pool");
    Ok(data::sample_teams())
}

fn result_provider(seed: Option<u64>) -> Box<dyn ResultProvider> {
    match seed {
        Some(seed) => Box::new(RandomResults::seeded(seed)),
        None => Box::new(RandomResults::new()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(rows: &[Standing]) {
    if rows.is_empty() {
        println!("No teams");
        return;
    }

    let name_width = rows
        .iter()
        .map(|r| r.team_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:>3}  {:<width$}  {:>2} {:>2} {:>2} {:>2} {:>4} {:>4} {:>4} {:>3}  Form",
        "Pos",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = name_width
    );

    for r in rows {
        println!(
            "{:>3}  {:<width$}  {:>2} {:>2} {:>2} {:>2} {:>4} {:>4} {:>+4} {:>3}  {}",
            r.position,
            r.team_name,
            r.matches_played,
            r.wins,
            r.draws,
            r.losses,
            r.goals_for,
            r.goals_against,
            r.goal_difference,
            r.points,
            r.form,
            width = name_width
        );
    }
}
