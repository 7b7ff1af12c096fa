//! Shared fixtures for the engine's unit test suites.
//! Builds hand-shaped mazes and a scoring client that records what it is sent.

use crate::maze::{Maze, MazeDimensions};
use crate::scoring::{LeaderboardEntry, ScoreRecord, ScoringClient, ScoringError};
use crate::types::{Cell, WallSet};

pub(crate) fn dims(width: usize, height: usize) -> MazeDimensions {
    MazeDimensions::new(width, height).expect("positive dimensions")
}

/// A `width x 1` strip with every interior wall removed.
pub(crate) fn open_corridor_fixture(width: usize) -> Maze {
    Maze::fully_open(dims(width, 1))
}

/// Open 3x3 grid whose center cell only has its south side open.
pub(crate) fn walled_center_fixture() -> (Maze, Cell) {
    let mut maze = Maze::fully_open(dims(3, 3));
    let center = Cell::new(1, 1);
    maze.set_walls(center, WallSet { north: true, south: false, east: true, west: true });
    (maze, center)
}

#[derive(Default)]
pub(crate) struct RecordingClient {
    pub(crate) submissions: Vec<ScoreRecord>,
    pub(crate) fail: bool,
}

impl ScoringClient for RecordingClient {
    fn submit_score(&mut self, record: &ScoreRecord) -> Result<(), ScoringError> {
        self.submissions.push(record.clone());
        if self.fail {
            return Err(ScoringError::Unavailable("connection refused".into()));
        }
        Ok(())
    }

    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError> {
        Ok(Vec::new())
    }
}
