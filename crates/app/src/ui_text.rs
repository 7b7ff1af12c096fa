//! Text for the status bar, overlays, leaderboard rows, and key hints.

use std::time::Instant;

use maze_core::{LeaderboardView, ScoringClient, Session};
use maze_runner::app_loop::{AppState, Screen};
use maze_runner::format_seconds;

pub fn player_label(name: &str) -> String {
    format!("Player: {name}")
}

/// Live while playing, frozen once the exit is reached.
pub fn timer_text<C: ScoringClient>(session: &Session<C>, now: Instant) -> Option<String> {
    let id = session.id()?;
    let elapsed = session.tick(id, now).or_else(|| session.final_elapsed())?;
    Some(format!("Time: {}s", format_seconds(elapsed.as_secs_f64())))
}

pub fn status_text<C: ScoringClient>(app: &AppState, session: &Session<C>, now: Instant) -> String {
    match &app.screen {
        Screen::Home => "Maze Runner".to_string(),
        Screen::LeaderboardLoading { .. } | Screen::Leaderboard(_) => "Leaderboard".to_string(),
        Screen::Playing | Screen::Won { .. } => {
            let label = player_label(session.player_name().as_str());
            match timer_text(session, now) {
                Some(timer) => format!("{label}    {timer}"),
                None => label,
            }
        }
    }
}

pub fn home_lines(app: &AppState) -> Vec<String> {
    let mut lines = vec!["Enter your name:".to_string(), format!("{}_", app.name_input)];
    if let Some(error) = &app.name_error {
        lines.push(error.clone());
    }
    lines
}

pub fn won_lines(time_seconds: f64) -> Vec<String> {
    vec!["You escaped!".to_string(), format!("Time: {}s", format_seconds(time_seconds))]
}

pub fn leaderboard_lines(view: &LeaderboardView) -> Vec<String> {
    match view {
        LeaderboardView::Ranked(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let time = format_seconds(entry.best_time);
                format!("{:>2}. {:<24} {time:>9}s", index + 1, entry.name)
            })
            .collect(),
        LeaderboardView::Empty => vec!["No scores yet.".to_string()],
        LeaderboardView::Unavailable => vec!["Error loading leaderboard.".to_string()],
    }
}

pub fn loading_lines() -> Vec<String> {
    vec!["Loading leaderboard...".to_string()]
}

pub fn footer_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Home => "Enter = start    Tab = leaderboard",
        Screen::Playing => "Arrows / WASD = move    Esc = give up",
        Screen::Won { .. } => "R = try again    H = home    L = leaderboard",
        Screen::LeaderboardLoading { .. } | Screen::Leaderboard(_) => "Esc = home",
    }
}
