use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::ascii::render_ascii;
use maze_core::mazegen::{BuildFrame, BuildObserver, ObserverError, generate_observed, seeded_rng};
use maze_core::paths::shortest_path;
use maze_core::{Direction, Maze, MazeDimensions, generate_seeded};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Generate and print a seeded maze", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 20)]
    width: usize,
    #[arg(long, default_value_t = 20)]
    height: usize,
    /// Print intermediate carving frames while the maze is built
    #[arg(long)]
    animate: bool,
    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 30)]
    frame_delay_ms: u64,
    /// Print the shortest start-to-exit route
    #[arg(long)]
    solve: bool,
    /// Emit a JSON report instead of ASCII art
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MazeReport<'a> {
    seed: u64,
    width: usize,
    height: usize,
    snapshot_hash: String,
    passages: usize,
    solution: Option<String>,
    maze: &'a Maze,
}

struct TerminalFrames<W> {
    out: W,
    delay: Duration,
}

impl<W: Write> BuildObserver for TerminalFrames<W> {
    fn on_frame(&mut self, frame: &BuildFrame<'_>) -> Result<(), ObserverError> {
        // Home the cursor and clear so frames overwrite each other.
        writeln!(
            self.out,
            "\x1b[H\x1b[2J{}carved {}/{} ({:.0}%)",
            render_ascii(frame.maze, None),
            frame.carved_cells,
            frame.total_cells,
            frame.progress_percent()
        )
        .and_then(|()| self.out.flush())
        .map_err(|err| ObserverError::new(err.to_string()))?;
        if !frame.complete {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

fn route_tokens(route: &[Direction]) -> String {
    route.iter().map(|direction| direction.token()).collect()
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    let args = Args::parse();

    let dimensions = MazeDimensions::new(args.width, args.height)
        .with_context(|| format!("Invalid maze size {}x{}", args.width, args.height))?;

    let maze = if args.animate && !args.json {
        let delay = Duration::from_millis(args.frame_delay_ms);
        let mut frames = TerminalFrames { out: io::stdout().lock(), delay };
        generate_observed(dimensions, &mut seeded_rng(args.seed, dimensions), &mut frames)
    } else {
        generate_seeded(args.seed, dimensions)
    };

    let route = if args.solve { shortest_path(&maze, maze.start(), maze.exit()) } else { None };

    if args.json {
        let report = MazeReport {
            seed: args.seed,
            width: maze.width(),
            height: maze.height(),
            snapshot_hash: format!("{:016x}", maze.snapshot_hash()),
            passages: maze.open_passages(),
            solution: route.as_deref().map(route_tokens),
            maze: &maze,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !args.animate {
        print!("{}", render_ascii(&maze, None));
    }
    println!("Seed: {}  Size: {}x{}", args.seed, maze.width(), maze.height());
    println!("Snapshot Hash: {:016x}", maze.snapshot_hash());
    if let Some(route) = route {
        println!("Solution ({} moves): {}", route.len(), route_tokens(&route));
    }
    Ok(())
}
