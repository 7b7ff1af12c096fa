//! Score records and the contract the session uses to reach a leaderboard.
//!
//! Record-shape rules (name 1..=64 characters, time in `[0, 36000)` seconds)
//! are enforced once, when a [`PlayerName`] or [`ScoreRecord`] is built. Both
//! the session and the leaderboard store only ever handle validated values.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const MAX_NAME_CHARS: usize = 64;
pub const MAX_TIME_SECONDS: f64 = 36_000.0;
pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const LEADERBOARD_LIMIT: usize = 50;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("player name is {chars} characters long (max {MAX_NAME_CHARS})")]
    NameTooLong { chars: usize },
    #[error("time {seconds} s is outside [0, {MAX_TIME_SECONDS})")]
    TimeOutOfRange { seconds: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("scoring service unavailable: {0}")]
    Unavailable(String),
    #[error("scoring service rejected the request: {0}")]
    Rejected(String),
    #[error("score storage failed: {0}")]
    Storage(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims surrounding whitespace; an empty name becomes `"Player"`.
    pub fn new(raw: &str) -> Result<Self, ScoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let chars = trimmed.chars().count();
        if chars > MAX_NAME_CHARS {
            return Err(ScoreError::NameTooLong { chars });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_string())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn round_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreRecord {
    name: PlayerName,
    #[serde(rename = "time")]
    time_seconds: f64,
}

impl ScoreRecord {
    /// Rounds the time to hundredths before checking its bounds.
    pub fn new(name: PlayerName, time_seconds: f64) -> Result<Self, ScoreError> {
        if !time_seconds.is_finite() || time_seconds < 0.0 {
            return Err(ScoreError::TimeOutOfRange { seconds: time_seconds });
        }
        let rounded = round_hundredths(time_seconds);
        if rounded >= MAX_TIME_SECONDS {
            return Err(ScoreError::TimeOutOfRange { seconds: time_seconds });
        }
        Ok(Self { name, time_seconds: rounded })
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn time_seconds(&self) -> f64 {
        self.time_seconds
    }
}

/// One ranked row: a player's best time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(rename = "time")]
    pub best_time: f64,
}

pub trait ScoringClient {
    /// Fire-and-forget from the session's point of view: the result is only logged.
    fn submit_score(&mut self, record: &ScoreRecord) -> Result<(), ScoringError>;

    /// Best time per name, ascending, already capped by the collaborator.
    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError>;
}

impl<C: ScoringClient + ?Sized> ScoringClient for &mut C {
    fn submit_score(&mut self, record: &ScoreRecord) -> Result<(), ScoringError> {
        (**self).submit_score(record)
    }

    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError> {
        (**self).fetch_leaderboard()
    }
}

/// Accepts and discards submissions; the leaderboard is always empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScoringClient;

impl ScoringClient for NoopScoringClient {
    fn submit_score(&mut self, _record: &ScoreRecord) -> Result<(), ScoringError> {
        Ok(())
    }

    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError> {
        Ok(Vec::new())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { delay: DEFAULT_RETRY_DELAY }
    }
}

/// What the leaderboard screen should show.
#[derive(Clone, Debug, PartialEq)]
pub enum LeaderboardView {
    Ranked(Vec<LeaderboardEntry>),
    Empty,
    Unavailable,
}

impl LeaderboardView {
    fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        if entries.is_empty() { Self::Empty } else { Self::Ranked(entries) }
    }
}

/// A leaderboard load that never blocks its caller.
///
/// [`LeaderboardFetch::begin`] makes the first attempt. A failure schedules the
/// single retry at `now + retry.delay`, and the host keeps calling
/// [`LeaderboardFetch::poll`] with its frame time until the fetch is `Ready`.
/// A failed retry resolves to `Unavailable`, never to stale or partial rows.
#[derive(Clone, Debug, PartialEq)]
pub enum LeaderboardFetch {
    Ready(LeaderboardView),
    RetryAt(Instant),
}

impl LeaderboardFetch {
    pub fn begin<C: ScoringClient + ?Sized>(
        client: &mut C,
        retry: RetryPolicy,
        now: Instant,
    ) -> Self {
        match client.fetch_leaderboard() {
            Ok(entries) => Self::Ready(LeaderboardView::from_entries(entries)),
            Err(first) => {
                let delay_ms = retry.delay.as_millis() as u64;
                warn!(error = %first, delay_ms, "leaderboard fetch failed; retry scheduled");
                Self::RetryAt(now + retry.delay)
            }
        }
    }

    /// Runs the scheduled retry once `now` reaches it. Anything else is returned as is.
    pub fn poll<C: ScoringClient + ?Sized>(self, client: &mut C, now: Instant) -> Self {
        match self {
            Self::RetryAt(retry_at) if now >= retry_at => match client.fetch_leaderboard() {
                Ok(entries) => Self::Ready(LeaderboardView::from_entries(entries)),
                Err(second) => {
                    warn!(error = %second, "leaderboard fetch failed after retry");
                    Self::Ready(LeaderboardView::Unavailable)
                }
            },
            pending => pending,
        }
    }

    pub fn view(&self) -> Option<&LeaderboardView> {
        match self {
            Self::Ready(view) => Some(view),
            Self::RetryAt(_) => None,
        }
    }
}
