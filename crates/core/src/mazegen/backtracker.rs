//! Step-wise depth-first carving over an explicit stack.
//!
//! One [`Backtracker::step`] either carves a passage to a random unvisited
//! neighbor of the cell on top of the stack, or pops that cell when it has no
//! unvisited neighbors left. Driving it to [`CarveStep::Done`] yields a
//! spanning tree over the whole grid; visited cells are never reconsidered,
//! which is what keeps the result acyclic.

use super::random::RandomSource;
use crate::maze::{Maze, MazeDimensions};
use crate::types::{Cell, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarveStep {
    Carved { from: Cell, to: Cell, direction: Direction },
    Backtracked(Cell),
    Done,
}

#[derive(Clone, Debug)]
pub struct Backtracker {
    maze: Maze,
    visited: Vec<bool>,
    stack: Vec<Cell>,
    visited_count: usize,
}

impl Backtracker {
    pub fn new(dimensions: MazeDimensions) -> Self {
        let maze = Maze::closed(dimensions);
        let start = dimensions.start();
        let mut visited = vec![false; dimensions.cell_count()];
        visited[dimensions.index(start)] = true;
        Self { maze, visited, stack: vec![start], visited_count: 1 }
    }

    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> CarveStep {
        let Some(&current) = self.stack.last() else {
            return CarveStep::Done;
        };

        let mut candidates = [Direction::North; 4];
        let mut candidate_count = 0;
        for direction in Direction::ALL {
            let neighbor = current.offset(direction);
            if self.maze.in_bounds(neighbor) && !self.is_visited(neighbor) {
                candidates[candidate_count] = direction;
                candidate_count += 1;
            }
        }

        if candidate_count == 0 {
            self.stack.pop();
            return CarveStep::Backtracked(current);
        }

        let direction = candidates[rng.choose_index(candidate_count)];
        let next = current.offset(direction);
        self.maze.carve(current, direction);
        let index = self.maze.dimensions().index(next);
        self.visited[index] = true;
        self.visited_count += 1;
        self.stack.push(next);
        CarveStep::Carved { from: current, to: next, direction }
    }

    /// Runs the remaining steps and returns the finished maze.
    pub fn finish<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Maze {
        while self.step(rng) != CarveStep::Done {}
        self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// The maze as carved so far.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn visited_cells(&self) -> usize {
        self.visited_count
    }

    pub fn total_cells(&self) -> usize {
        self.visited.len()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.maze.dimensions().index(cell)]
    }
}
