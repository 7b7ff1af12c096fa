//! Accepted-move journal for deterministic replay of a session.

use serde::{Deserialize, Serialize};

use crate::maze::{MazeDimensions, MazeError};
use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Milliseconds since the session started.
    pub elapsed_ms: u64,
    pub direction: Direction,
}

impl InputJournal {
    pub fn new(seed: u64, dimensions: MazeDimensions) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            width: dimensions.width(),
            height: dimensions.height(),
            inputs: Vec::new(),
        }
    }

    pub fn append_move(&mut self, elapsed_ms: u64, direction: Direction) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, elapsed_ms, direction });
    }

    pub fn dimensions(&self) -> Result<MazeDimensions, MazeError> {
        MazeDimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_moves_are_sequenced_and_survive_json() {
        let dimensions = MazeDimensions::new(4, 3).expect("positive dimensions");
        let mut journal = InputJournal::new(42, dimensions);
        journal.append_move(120, Direction::East);
        journal.append_move(480, Direction::South);

        assert_eq!(journal.inputs[0].seq, 0);
        assert_eq!(journal.inputs[1].seq, 1);
        assert_eq!(journal.dimensions(), Ok(dimensions));

        let json = serde_json::to_string(&journal).expect("serializes");
        let decoded: InputJournal = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(decoded, journal);
    }

    #[test]
    fn zero_sized_journal_reports_invalid_dimensions() {
        let journal = InputJournal {
            format_version: JOURNAL_FORMAT_VERSION,
            seed: 1,
            width: 0,
            height: 3,
            inputs: Vec::new(),
        };
        assert!(journal.dimensions().is_err());
    }
}
