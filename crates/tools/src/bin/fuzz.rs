use std::io;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::Parser;
use maze_core::paths::reachable_cells;
use maze_core::{
    Direction, MazeDimensions, MoveOutcome, NoopScoringClient, Session, SessionConfig, can_move,
    replay_to_end,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 20)]
    width: usize,
    #[arg(long, default_value_t = 20)]
    height: usize,
    #[arg(short, long, default_value_t = 10_000)]
    moves: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    let args = Args::parse();

    println!(
        "Starting fuzz walk on seed {} ({}x{}) for max {} moves...",
        args.seed, args.width, args.height, args.moves
    );
    let dimensions = MazeDimensions::new(args.width, args.height)?;
    let config = SessionConfig { dimensions, ..SessionConfig::default() };
    let mut session = Session::new(config, NoopScoringClient);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let t0 = Instant::now();
    session.start(args.seed, t0);

    let Some(maze) = session.maze().cloned() else {
        bail!("session did not start");
    };
    let reachable = reachable_cells(&maze, maze.start()).len();
    if reachable != dimensions.cell_count() {
        bail!("Invariant failed: only {reachable} of {} cells reachable", dimensions.cell_count());
    }

    let mut blocked = 0_u32;
    for step in 0..args.moves {
        let Some(before) = session.player_cell() else {
            bail!("Invariant failed: run vanished at step {step}");
        };
        let direction = choose(&mut rng, &Direction::ALL);
        let legal = can_move(&maze, before, direction);
        let now = t0 + Duration::from_millis(u64::from(step) * 50);

        match session.move_player(direction, now) {
            MoveOutcome::Blocked if !legal => blocked += 1,
            MoveOutcome::Moved { to } if legal && to == before.offset(direction) => {
                debug!(step, x = to.x, y = to.y, "moved");
            }
            MoveOutcome::Finished { to, elapsed_seconds } if legal && to == maze.exit() => {
                let moves = step + 1;
                println!("Reached the exit after {moves} moves ({elapsed_seconds:.2}s simulated)");
                break;
            }
            outcome => bail!(
                "Invariant failed at step {step}: {direction:?} from {before:?} \
                 gave {outcome:?} (legal={legal})"
            ),
        }
    }
    info!(blocked, "walk finished");

    if let Some(journal) = session.journal() {
        let replayed = replay_to_end(journal)?;
        if Some(replayed.final_cell) != session.player_cell() {
            bail!("Invariant failed: replay ended at {:?}", replayed.final_cell);
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
