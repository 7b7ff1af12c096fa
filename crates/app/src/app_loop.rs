use std::time::Instant;

use macroquad::prelude::KeyCode;
use maze_core::scoring::MAX_NAME_CHARS;
use maze_core::{
    Direction, InputJournal, LeaderboardFetch, LeaderboardView, MoveOutcome, PlayerName, RetryPolicy,
    ScoringClient, Session,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Home,
    Playing,
    /// The win overlay drawn over the finished maze.
    Won { time_seconds: f64 },
    /// The first fetch failed; the retry runs on the first frame at or after `retry_at`.
    LeaderboardLoading { retry_at: Instant },
    Leaderboard(LeaderboardView),
}

pub struct AppState {
    pub screen: Screen,
    pub name_input: String,
    pub name_error: Option<String>,
    pub retry: RetryPolicy,
    /// Journals of runs that finished during the current frame's `tick()` call.
    /// Drained by the caller to persist the last run.
    pub finished_journals: Vec<InputJournal>,
    pinned_seed: Option<u64>,
}

impl AppState {
    /// `first_seed` is used for the first maze only; later mazes ask the
    /// caller's seed source.
    pub fn new(name_prefill: Option<&str>, first_seed: Option<u64>) -> Self {
        let name_input = name_prefill.unwrap_or_default().chars().take(MAX_NAME_CHARS).collect();
        Self {
            screen: Screen::Home,
            name_input,
            name_error: None,
            retry: RetryPolicy::default(),
            finished_journals: Vec::new(),
            pinned_seed: first_seed,
        }
    }

    /// Process the keys and characters of one frame.
    pub fn tick<C, S>(
        &mut self,
        session: &mut Session<C>,
        keys_pressed: &[KeyCode],
        typed: &[char],
        now: Instant,
        next_seed: &mut S,
    ) where
        C: ScoringClient,
        S: FnMut() -> u64,
    {
        self.finished_journals.clear();

        match self.screen {
            Screen::Home => {
                self.edit_name(keys_pressed, typed);
                let submit = keys_pressed.contains(&KeyCode::Enter)
                    || keys_pressed.contains(&KeyCode::KpEnter);
                if submit {
                    match PlayerName::new(&self.name_input) {
                        Ok(name) => {
                            self.name_error = None;
                            session.set_player_name(name);
                            self.start_run(session, now, next_seed);
                        }
                        Err(err) => self.name_error = Some(err.to_string()),
                    }
                } else if keys_pressed.contains(&KeyCode::Tab) {
                    self.show_leaderboard(session, now);
                }
            }
            Screen::Playing => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    session.reset();
                    self.screen = Screen::Home;
                    return;
                }
                for direction in keys_pressed.iter().filter_map(|key| direction_for_key(*key)) {
                    if let MoveOutcome::Finished { elapsed_seconds, .. } =
                        session.move_player(direction, now)
                    {
                        self.finished_journals.extend(session.journal().cloned());
                        self.screen = Screen::Won { time_seconds: elapsed_seconds };
                        break;
                    }
                }
            }
            Screen::Won { .. } => {
                if keys_pressed.contains(&KeyCode::R) {
                    self.start_run(session, now, next_seed);
                } else if keys_pressed.contains(&KeyCode::H) {
                    session.reset();
                    self.screen = Screen::Home;
                } else if keys_pressed.contains(&KeyCode::L) {
                    self.show_leaderboard(session, now);
                }
            }
            Screen::LeaderboardLoading { retry_at } => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    session.reset();
                    self.screen = Screen::Home;
                    return;
                }
                let fetch = LeaderboardFetch::RetryAt(retry_at).poll(session.client_mut(), now);
                self.apply_fetch(fetch);
            }
            Screen::Leaderboard(_) => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    session.reset();
                    self.screen = Screen::Home;
                }
            }
        }
    }

    fn edit_name(&mut self, keys_pressed: &[KeyCode], typed: &[char]) {
        if keys_pressed.contains(&KeyCode::Backspace) {
            self.name_input.pop();
        }
        for &ch in typed {
            if ch.is_control() || self.name_input.chars().count() >= MAX_NAME_CHARS {
                continue;
            }
            self.name_input.push(ch);
        }
    }

    fn start_run<C: ScoringClient, S: FnMut() -> u64>(
        &mut self,
        session: &mut Session<C>,
        now: Instant,
        next_seed: &mut S,
    ) {
        let seed = self.pinned_seed.take().unwrap_or_else(&mut *next_seed);
        session.start(seed, now);
        self.screen = Screen::Playing;
        // Start and exit coincide on a 1x1 grid.
        if session.check_win(now) {
            self.finished_journals.extend(session.journal().cloned());
            let time_seconds = session.final_elapsed_seconds().unwrap_or_default();
            self.screen = Screen::Won { time_seconds };
        }
    }

    fn show_leaderboard<C: ScoringClient>(&mut self, session: &mut Session<C>, now: Instant) {
        let fetch = LeaderboardFetch::begin(session.client_mut(), self.retry, now);
        self.apply_fetch(fetch);
    }

    fn apply_fetch(&mut self, fetch: LeaderboardFetch) {
        self.screen = match fetch {
            LeaderboardFetch::Ready(view) => {
                debug!(?view, "leaderboard loaded");
                Screen::Leaderboard(view)
            }
            LeaderboardFetch::RetryAt(retry_at) => Screen::LeaderboardLoading { retry_at },
        };
    }
}

/// Arrow keys and WASD.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::North),
        KeyCode::Down | KeyCode::S => Some(Direction::South),
        KeyCode::Left | KeyCode::A => Some(Direction::West),
        KeyCode::Right | KeyCode::D => Some(Direction::East),
        _ => None,
    }
}
