use std::{fs, io};

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{InputJournal, ReplayResult, replay_to_end};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal)
        .with_context(|| format!("Replay of {} failed", args.journal))?;

    println!("Replay complete.");
    println!("Maze: {}x{} seed {}", journal.width, journal.height, journal.seed);
    println!("Moves: {}", journal.inputs.len());
    println!("Final cell: ({}, {})", result.final_cell.x, result.final_cell.y);
    match result.final_elapsed_ms {
        Some(ms) if result.finished => println!("Finished in {:.2}s", ms as f64 / 1000.0),
        _ => println!("Exit not reached"),
    }
    println!("Maze Hash: {:016x}", result.maze_hash);

    Ok(())
}
