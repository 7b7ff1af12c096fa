use std::time::{Duration, Instant};

use thiserror::Error;

use crate::journal::InputJournal;
use crate::maze::{Maze, MazeError};
use crate::scoring::NoopScoringClient;
use crate::session::{Session, SessionConfig};
use crate::types::{Cell, MoveOutcome};

#[derive(Debug, PartialEq, Error)]
pub enum ReplayError {
    #[error("journal dimensions are invalid: {0}")]
    InvalidDimensions(#[from] MazeError),
    #[error("journal move {seq} is blocked by a wall or the grid edge")]
    RejectedMove { seq: u64 },
    #[error("journal move {seq} comes after the exit was reached")]
    InputAfterFinish { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_cell: Cell,
    pub finished: bool,
    /// Frozen finishing time, when the journal reaches the exit.
    pub final_elapsed_ms: Option<u64>,
    pub maze_hash: u64,
}

/// Regenerates the journal's maze and feeds every recorded move back through
/// a fresh session. Journals only hold accepted moves, so any rejection means
/// the journal does not belong to this seed and size.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let dimensions = journal.dimensions()?;
    let config = SessionConfig { dimensions, ..SessionConfig::default() };
    let mut session = Session::new(config, NoopScoringClient);
    let t0 = Instant::now();
    session.start(journal.seed, t0);
    // Start and exit coincide on a 1x1 grid.
    session.check_win(t0);

    for input in &journal.inputs {
        let now = t0 + Duration::from_millis(input.elapsed_ms);
        match session.move_player(input.direction, now) {
            MoveOutcome::Moved { .. } | MoveOutcome::Finished { .. } => {}
            MoveOutcome::Blocked => return Err(ReplayError::RejectedMove { seq: input.seq }),
            MoveOutcome::Ignored => return Err(ReplayError::InputAfterFinish { seq: input.seq }),
        }
    }

    Ok(ReplayResult {
        final_cell: session.player_cell().unwrap_or(dimensions.start()),
        finished: session.is_finished(),
        final_elapsed_ms: session.final_elapsed().map(|elapsed| elapsed.as_millis() as u64),
        maze_hash: session.maze().map(Maze::snapshot_hash).unwrap_or_default(),
    })
}
