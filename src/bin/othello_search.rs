//! Command-line best-move search
//!
//! Prints one line `row,col,score` on stdout. Any failure prints `0,0,0`
//! instead, reports the error on stderr and exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use othello::config::EngineConfig;
use othello::protocol::{self, FAILURE_LINE};
use othello::AIEngine;

/// Find the best Othello move for one position.
#[derive(Parser)]
#[command(name = "othello-search", about = "Find the best Othello move for a position")]
struct Cli {
    /// Board cells in row-major order: 1 empty, 2 white, 3 black
    board: String,

    /// Side to move: 0 for black, 1 for white
    side: String,

    /// Search depth in plies
    #[arg(allow_negative_numbers = true)]
    depth: i32,

    /// Board side length (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(size) = cli.size {
        config.board_size = size;
    }

    let board = protocol::decode_board(&cli.board, config.board_size).context("reading board")?;
    let side = protocol::parse_side(&cli.side)?;
    config.depth = protocol::validate_depth(cli.depth)?;

    let mut engine = AIEngine::with_config(&config);
    let result = engine.get_move_with_stats(&board, side);
    Ok(protocol::format_result(result.best_move, result.score))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            println!("{FAILURE_LINE}");
            // Usage text goes to stderr
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{FAILURE_LINE}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
