//! Grid/wall storage for a rectangular maze.
//!
//! Walls live in a flat `Vec<WallSet>` indexed by `y * width + x`. Passages are
//! only ever opened in pairs (see [`Maze::carve`]), so a cell's wall facing a
//! neighbor always agrees with the neighbor's wall facing back.

use std::hash::Hasher;

use serde::Serialize;
use thiserror::Error;
use xxhash_rust::xxh3::Xxh3;

use crate::types::{Cell, Direction, WallSet};

pub const DEFAULT_GRID_SIZE: usize = 20;
/// Upper bound on `width * height`, so a grid that passes validation can always be allocated.
pub const MAX_CELL_COUNT: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("maze dimensions {width}x{height} exceed {MAX_CELL_COUNT} cells")]
    TooLarge { width: usize, height: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MazeDimensions {
    width: usize,
    height: usize,
}

impl MazeDimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::ZeroDimension { width, height });
        }
        let within_cap = width.checked_mul(height).is_some_and(|cells| cells <= MAX_CELL_COUNT);
        if !within_cap {
            return Err(MazeError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn square(side: usize) -> Result<Self, MazeError> {
        Self::new(side, side)
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn height(self) -> usize {
        self.height
    }

    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    pub fn start(self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn exit(self) -> Cell {
        Cell::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    pub(crate) fn index(self, cell: Cell) -> usize {
        (cell.y as usize) * self.width + (cell.x as usize)
    }

    pub(crate) fn cell_at(self, index: usize) -> Cell {
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

impl Default for MazeDimensions {
    fn default() -> Self {
        Self { width: DEFAULT_GRID_SIZE, height: DEFAULT_GRID_SIZE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Maze {
    dimensions: MazeDimensions,
    walls: Vec<WallSet>,
}

impl Maze {
    /// A grid with every wall present.
    pub fn closed(dimensions: MazeDimensions) -> Self {
        Self { dimensions, walls: vec![WallSet::CLOSED; dimensions.cell_count()] }
    }

    pub fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn start(&self) -> Cell {
        self.dimensions.start()
    }

    pub fn exit(&self) -> Cell {
        self.dimensions.exit()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.dimensions.contains(cell)
    }

    /// Bounds-checked lookup; `None` for cells outside the grid.
    pub fn walls(&self, cell: Cell) -> Option<WallSet> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(self.walls[self.dimensions.index(cell)])
    }

    /// Whether the passage from `cell` toward `direction` is open on both sides.
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        let Some(here) = self.walls(cell) else {
            return false;
        };
        if here.has_wall(direction) {
            return false;
        }
        self.walls(cell.offset(direction))
            .is_some_and(|there| !there.has_wall(direction.opposite()))
    }

    /// Opens the wall-pair between `cell` and its neighbor in `direction`.
    /// Returns `false` (and changes nothing) when the neighbor is off-grid.
    pub(crate) fn carve(&mut self, cell: Cell, direction: Direction) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let neighbor = cell.offset(direction);
        if !self.in_bounds(neighbor) {
            return false;
        }
        let here = self.dimensions.index(cell);
        let there = self.dimensions.index(neighbor);
        self.walls[here].set_wall(direction, false);
        self.walls[there].set_wall(direction.opposite(), false);
        true
    }

    /// Number of open wall-pairs. A perfect maze has `cells - 1`.
    pub fn open_passages(&self) -> usize {
        let mut count = 0;
        for index in 0..self.walls.len() {
            let cell = self.dimensions.cell_at(index);
            if self.is_open(cell, Direction::East) {
                count += 1;
            }
            if self.is_open(cell, Direction::South) {
                count += 1;
            }
        }
        count
    }

    /// Open neighbors of `cell`, in [`Direction::ALL`] order.
    pub fn passages_from(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.is_open(cell, direction))
            .map(move |direction| (direction, cell.offset(direction)))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.walls.len());
        bytes.extend((self.dimensions.width as u32).to_le_bytes());
        bytes.extend((self.dimensions.height as u32).to_le_bytes());
        bytes.extend(self.walls.iter().map(|walls| walls.to_bits()));
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.canonical_bytes());
        hasher.finish()
    }

    #[cfg(test)]
    pub(crate) fn fully_open(dimensions: MazeDimensions) -> Self {
        let mut maze = Self::closed(dimensions);
        for index in 0..maze.walls.len() {
            let cell = dimensions.cell_at(index);
            maze.carve(cell, Direction::East);
            maze.carve(cell, Direction::South);
        }
        maze
    }

    #[cfg(test)]
    pub(crate) fn set_walls(&mut self, cell: Cell, walls: WallSet) {
        let index = self.dimensions.index(cell);
        self.walls[index] = walls;
    }
}
