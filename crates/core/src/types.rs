use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `direction`. May lie outside any grid.
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Enumeration order used by the generator when collecting neighbors.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Parses a single-letter direction token (`N`, `S`, `E`, `W`, any case).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "N" | "n" => Some(Direction::North),
            "S" | "s" => Some(Direction::South),
            "E" | "e" => Some(Direction::East),
            "W" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }
}

/// Boundary flags for one cell. `true` means a wall is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallSet {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl WallSet {
    pub const CLOSED: WallSet = WallSet { north: true, south: true, east: true, west: true };
    pub const OPEN: WallSet = WallSet { north: false, south: false, east: false, west: false };

    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.north = present,
            Direction::South => self.south = present,
            Direction::East => self.east = present,
            Direction::West => self.west = present,
        }
    }

    pub(crate) fn to_bits(self) -> u8 {
        u8::from(self.north)
            | (u8::from(self.south) << 1)
            | (u8::from(self.east) << 2)
            | (u8::from(self.west) << 3)
    }
}

impl Default for WallSet {
    fn default() -> Self {
        Self::CLOSED
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    Finished,
}

/// Result of one `move` request against the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The session is Idle or Finished; nothing changed.
    Ignored,
    /// A wall or the grid edge blocks the move; nothing changed.
    Blocked,
    Moved { to: Cell },
    /// The move reached the exit and froze the clock.
    Finished { to: Cell, elapsed_seconds: f64 },
}
