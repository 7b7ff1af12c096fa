//! Movement legality. Pure and total: every query answers `true` or `false`.

use crate::maze::Maze;
use crate::types::{Cell, Direction};

/// A move is legal when `cell` has no wall toward `direction` and the
/// neighbor in that direction lies inside the grid. Off-grid origins are
/// never legal.
pub fn can_move(maze: &Maze, cell: Cell, direction: Direction) -> bool {
    let Some(walls) = maze.walls(cell) else {
        return false;
    };
    if walls.has_wall(direction) {
        return false;
    }
    maze.in_bounds(cell.offset(direction))
}

/// Token form of [`can_move`]; unrecognized tokens fail closed.
pub fn can_move_token(maze: &Maze, cell: Cell, token: &str) -> bool {
    Direction::from_token(token).is_some_and(|direction| can_move(maze, cell, direction))
}

/// The destination of a legal move, if any.
pub fn step_target(maze: &Maze, cell: Cell, direction: Direction) -> Option<Cell> {
    can_move(maze, cell, direction).then(|| cell.offset(direction))
}
