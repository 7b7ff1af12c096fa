//! Rendering for each screen.

use std::time::Instant;

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{
    footer_text, home_lines, leaderboard_lines, loading_lines, status_text, won_lines,
};
use macroquad::prelude::*;
use maze_core::{Cell, Direction, Maze, ScoringClient, Session};
use maze_runner::app_loop::{AppState, Screen};

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.85, g: 0.85, b: 0.9, a: 1.0 };
const OVERLAY_COLOR: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 };
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 27.0;
const LINE_HEIGHT: f32 = 30.0;
const MAX_CELL_SIZE: f32 = 48.0;

/// Where the maze sits inside its panel.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MazeGeometry {
    origin_x: f32,
    origin_y: f32,
    cell: f32,
}

impl MazeGeometry {
    fn fit(panel: PanelRect, columns: usize, rows: usize) -> Self {
        let cell = (panel.width / columns as f32)
            .min(panel.height / rows as f32)
            .clamp(0.0, MAX_CELL_SIZE);
        Self {
            origin_x: panel.x + (panel.width - cell * columns as f32) / 2.0,
            origin_y: panel.y + (panel.height - cell * rows as f32) / 2.0,
            cell,
        }
    }

    fn cell_origin(self, cell: Cell) -> (f32, f32) {
        (self.origin_x + cell.x as f32 * self.cell, self.origin_y + cell.y as f32 * self.cell)
    }

    fn cell_center(self, cell: Cell) -> (f32, f32) {
        let (x, y) = self.cell_origin(cell);
        (x + self.cell / 2.0, y + self.cell / 2.0)
    }
}

type Segment = (f32, f32, f32, f32);

/// One segment per wall. Shared walls are emitted once: every cell draws its
/// north and west sides, the last column adds east and the last row adds south.
fn wall_segments(maze: &Maze, geometry: MazeGeometry) -> Vec<Segment> {
    let mut segments = Vec::new();
    let (columns, rows) = (maze.width() as i32, maze.height() as i32);

    for y in 0..rows {
        for x in 0..columns {
            let cell = Cell::new(x, y);
            let Some(walls) = maze.walls(cell) else {
                continue;
            };
            let (left, top) = geometry.cell_origin(cell);
            let (right, bottom) = (left + geometry.cell, top + geometry.cell);

            if walls.has_wall(Direction::North) {
                segments.push((left, top, right, top));
            }
            if walls.has_wall(Direction::West) {
                segments.push((left, top, left, bottom));
            }
            if x == columns - 1 && walls.has_wall(Direction::East) {
                segments.push((right, top, right, bottom));
            }
            if y == rows - 1 && walls.has_wall(Direction::South) {
                segments.push((left, bottom, right, bottom));
            }
        }
    }
    segments
}

pub fn draw_frame<C: ScoringClient>(
    app: &AppState,
    session: &Session<C>,
    layout: &FrameLayout,
    now: Instant,
) {
    draw_panel_borders(layout);
    draw_text_line(&status_text(app, session, now), layout.status, 0, 24.0, WHITE);
    draw_text_line(footer_text(&app.screen), layout.footer, 0, 18.0, LIGHTGRAY);

    match &app.screen {
        Screen::Home => draw_lines(&home_lines(app), layout.maze, 28.0, WHITE),
        Screen::Playing => draw_session_maze(session, layout.maze),
        Screen::Won { time_seconds } => {
            draw_session_maze(session, layout.maze);
            draw_won_overlay(*time_seconds, layout.maze);
        }
        Screen::LeaderboardLoading { .. } => {
            draw_lines(&loading_lines(), layout.maze, 22.0, LIGHTGRAY);
        }
        Screen::Leaderboard(view) => draw_lines(&leaderboard_lines(view), layout.maze, 22.0, WHITE),
    }
}

fn draw_panel_borders(layout: &FrameLayout) {
    for panel in [layout.status, layout.maze, layout.footer] {
        draw_rectangle_lines(panel.x, panel.y, panel.width, panel.height, 1.0, BORDER_COLOR);
    }
}

fn draw_text_line(text: &str, panel: PanelRect, index: usize, font_size: f32, color: Color) {
    draw_text(
        text,
        panel.x + PANEL_PAD_X,
        panel.y + PANEL_PAD_Y + index as f32 * LINE_HEIGHT,
        font_size,
        color,
    );
}

fn draw_lines(lines: &[String], panel: PanelRect, font_size: f32, color: Color) {
    for (index, line) in lines.iter().enumerate() {
        draw_text_line(line, panel, index, font_size, color);
    }
}

fn draw_session_maze<C: ScoringClient>(session: &Session<C>, panel: PanelRect) {
    let Some(maze) = session.maze() else {
        return;
    };
    let geometry = MazeGeometry::fit(panel, maze.width(), maze.height());
    let inset = geometry.cell * 0.2;

    for (cell, color) in [(maze.start(), DARKGREEN), (maze.exit(), MAROON)] {
        let (x, y) = geometry.cell_origin(cell);
        let side = geometry.cell - 2.0 * inset;
        draw_rectangle(x + inset, y + inset, side, side, color);
    }

    let thickness = (geometry.cell * 0.08).max(1.0);
    for (x1, y1, x2, y2) in wall_segments(maze, geometry) {
        draw_line(x1, y1, x2, y2, thickness, WALL_COLOR);
    }

    if let Some(player) = session.player_cell() {
        let (x, y) = geometry.cell_center(player);
        draw_circle(x, y, geometry.cell * 0.3, GOLD);
    }
}

fn draw_won_overlay(time_seconds: f64, panel: PanelRect) {
    draw_rectangle(panel.x, panel.y, panel.width, panel.height, OVERLAY_COLOR);
    let lines = won_lines(time_seconds);
    let top = PanelRect { y: panel.y + panel.height / 2.0 - LINE_HEIGHT, ..panel };
    draw_lines(&lines, top, 36.0, YELLOW);
}
