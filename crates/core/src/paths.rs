//! Breadth-first traversal over open passages.
//! Used for connectivity checks and for walking a maze from start to exit.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::maze::Maze;
use crate::types::{Cell, Direction};

pub fn reachable_cells(maze: &Maze, from: Cell) -> BTreeSet<Cell> {
    let mut visited = BTreeSet::new();
    if !maze.in_bounds(from) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for (_, neighbor) in maze.passages_from(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Directions leading from `from` to `to` along open passages, or `None` if
/// the two cells are not connected. Empty when `from == to`.
pub fn shortest_path(maze: &Maze, from: Cell, to: Cell) -> Option<Vec<Direction>> {
    if !maze.in_bounds(from) || !maze.in_bounds(to) {
        return None;
    }
    if from == to {
        return Some(Vec::new());
    }

    let mut came_from: BTreeMap<Cell, (Cell, Direction)> = BTreeMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for (direction, neighbor) in maze.passages_from(current) {
            if neighbor == from || came_from.contains_key(&neighbor) {
                continue;
            }
            came_from.insert(neighbor, (current, direction));
            if neighbor == to {
                return Some(unwind(&came_from, from, to));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

fn unwind(came_from: &BTreeMap<Cell, (Cell, Direction)>, from: Cell, to: Cell) -> Vec<Direction> {
    let mut steps = Vec::new();
    let mut cursor = to;
    while cursor != from {
        let Some(&(previous, direction)) = came_from.get(&cursor) else {
            break;
        };
        steps.push(direction);
        cursor = previous;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeDimensions;

    fn dims(width: usize, height: usize) -> MazeDimensions {
        MazeDimensions::new(width, height).expect("positive dimensions")
    }

    #[test]
    fn closed_maze_reaches_only_the_origin() {
        let maze = Maze::closed(dims(3, 3));
        let reached = reachable_cells(&maze, Cell::new(1, 1));
        assert_eq!(reached.len(), 1);
        assert!(shortest_path(&maze, Cell::new(0, 0), Cell::new(2, 2)).is_none());
    }

    #[test]
    fn open_maze_path_has_manhattan_length() {
        let maze = Maze::fully_open(dims(4, 3));
        let path = shortest_path(&maze, maze.start(), maze.exit()).expect("connected");
        assert_eq!(path.len(), 3 + 2);

        let mut cursor = maze.start();
        for direction in path {
            assert!(maze.is_open(cursor, direction));
            cursor = cursor.offset(direction);
        }
        assert_eq!(cursor, maze.exit());
    }

    #[test]
    fn path_to_self_is_empty_and_off_grid_is_none() {
        let maze = Maze::fully_open(dims(2, 2));
        assert_eq!(shortest_path(&maze, Cell::new(1, 1), Cell::new(1, 1)), Some(Vec::new()));
        assert_eq!(shortest_path(&maze, Cell::new(0, 0), Cell::new(5, 5)), None);
        assert!(reachable_cells(&maze, Cell::new(-1, 0)).is_empty());
    }
}
