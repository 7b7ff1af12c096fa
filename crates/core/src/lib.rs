pub mod ascii;
pub mod journal;
pub mod leaderboard;
pub mod maze;
pub mod mazegen;
pub mod movement;
pub mod paths;
pub mod replay;
pub mod scoring;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use journal::{InputJournal, InputRecord};
pub use leaderboard::{Leaderboard, LocalScoringClient};
pub use maze::{DEFAULT_GRID_SIZE, MAX_CELL_COUNT, Maze, MazeDimensions, MazeError};
pub use mazegen::{generate, generate_seeded};
pub use movement::{can_move, can_move_token};
pub use replay::*;
pub use scoring::{
    LeaderboardEntry, LeaderboardFetch, LeaderboardView, NoopScoringClient, PlayerName, RetryPolicy,
    ScoreError, ScoreRecord, ScoringClient, ScoringError,
};
pub use session::{Session, SessionConfig};
pub use types::*;
