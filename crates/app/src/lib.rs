use std::path::PathBuf;

use directories::ProjectDirs;

pub mod app_loop;
pub mod config;
pub mod last_run_file;
pub mod score_file;
pub mod seed;

pub const APP_NAME: &str = "Maze Runner";

/// Directory holding `scores.json` and `last_run.json`.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Seconds with two decimals, as shown by the timer and leaderboard.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2}")
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
