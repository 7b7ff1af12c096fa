//! Plain-text maze rendering for diagnostics and the command-line tools.

use crate::maze::Maze;
use crate::types::{Cell, Direction};

pub fn render_ascii(maze: &Maze, player: Option<Cell>) -> String {
    let mut out = String::new();
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            out.push('+');
            out.push_str(if has_wall(maze, Cell::new(x, y), Direction::North) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for x in 0..maze.width() as i32 {
            let cell = Cell::new(x, y);
            out.push(if has_wall(maze, cell, Direction::West) { '|' } else { ' ' });
            out.push(' ');
            out.push(marker(maze, cell, player));
            out.push(' ');
        }
        let last = Cell::new(maze.width() as i32 - 1, y);
        out.push(if has_wall(maze, last, Direction::East) { '|' } else { ' ' });
        out.push('\n');
    }

    let bottom = maze.height() as i32 - 1;
    for x in 0..maze.width() as i32 {
        out.push('+');
        out.push_str(if has_wall(maze, Cell::new(x, bottom), Direction::South) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");
    out
}

fn has_wall(maze: &Maze, cell: Cell, direction: Direction) -> bool {
    maze.walls(cell).is_none_or(|walls| walls.has_wall(direction))
}

fn marker(maze: &Maze, cell: Cell, player: Option<Cell>) -> char {
    if player == Some(cell) {
        '@'
    } else if cell == maze.start() {
        'S'
    } else if cell == maze.exit() {
        'E'
    } else {
        ' '
    }
}
