//! Frame-by-frame build for hosts that want to draw the maze while it is carved.
//!
//! The observer is a suspension point, nothing more: it sees the partially
//! carved maze every [`FRAME_CADENCE`] carves and once at completion. An
//! observer failure ends observation and the remaining steps run unobserved
//! against the same random stream, so the finished maze never depends on
//! whether (or how long) anyone watched.

use thiserror::Error;
use tracing::warn;

use super::backtracker::{Backtracker, CarveStep};
use super::random::RandomSource;
use crate::maze::{Maze, MazeDimensions};

pub const FRAME_CADENCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("build observer unavailable: {reason}")]
pub struct ObserverError {
    pub reason: String,
}

impl ObserverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BuildFrame<'a> {
    pub maze: &'a Maze,
    pub carved_cells: usize,
    pub total_cells: usize,
    pub complete: bool,
}

impl BuildFrame<'_> {
    pub fn progress_percent(&self) -> f32 {
        if self.total_cells == 0 {
            return 100.0;
        }
        (self.carved_cells as f32 / self.total_cells as f32) * 100.0
    }
}

pub trait BuildObserver {
    fn on_frame(&mut self, frame: &BuildFrame<'_>) -> Result<(), ObserverError>;
}

pub fn generate_observed<R, O>(dimensions: MazeDimensions, rng: &mut R, observer: &mut O) -> Maze
where
    R: RandomSource + ?Sized,
    O: BuildObserver + ?Sized,
{
    let mut builder = Backtracker::new(dimensions);
    let mut observing = true;
    let mut carves = 0_usize;

    loop {
        match builder.step(rng) {
            CarveStep::Carved { .. } => {
                carves += 1;
                if observing && carves % FRAME_CADENCE == 0 {
                    observing = emit_frame(&builder, false, observer);
                }
            }
            CarveStep::Backtracked(_) => {}
            CarveStep::Done => break,
        }
    }

    if observing {
        emit_frame(&builder, true, observer);
    }
    builder.into_maze()
}

fn emit_frame<O: BuildObserver + ?Sized>(
    builder: &Backtracker,
    complete: bool,
    observer: &mut O,
) -> bool {
    let frame = BuildFrame {
        maze: builder.maze(),
        carved_cells: builder.visited_cells(),
        total_cells: builder.total_cells(),
        complete,
    };
    match observer.on_frame(&frame) {
        Ok(()) => true,
        Err(err) => {
            let carved = frame.carved_cells;
            warn!(error = %err, carved, "falling back to synchronous maze build");
            false
        }
    }
}
