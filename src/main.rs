use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use grid_snake::config::{load_config, GameConfig};
use grid_snake::{Direction, GameError, GameState, TickOutcome};
use log::info;

/// Runs a scripted Snake simulation and prints the final board as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file with `rows`, `columns` and `seed`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of grid rows.
    #[arg(long)]
    rows: Option<u16>,

    /// Override the number of grid columns.
    #[arg(long)]
    columns: Option<u16>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// One tick per character: U/D/L/R turn first, `.` keeps going.
    #[arg(long, default_value = "")]
    moves: String,
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let mut state = GameState::from_config(&config)?;

    run_script(&mut state, &cli.moves)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &state.snapshot())?;
    writeln!(stdout)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, GameError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(config)
}

fn run_script(state: &mut GameState, script: &str) -> Result<(), GameError> {
    for step in script.chars().filter(|c| !c.is_whitespace()) {
        if step != '.' {
            state.change_direction(Direction::try_from(step)?);
        }

        if let TickOutcome::GameOver(reason) = state.tick() {
            info!("stopping script at tick {}: {reason:?}", state.tick_count());
            break;
        }
    }

    Ok(())
}
