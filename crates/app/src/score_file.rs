//! File-backed scoring collaborator: every finished run is appended to
//! `scores.json` and the leaderboard is ranked from what the file holds.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::{
    Leaderboard, LeaderboardEntry, PlayerName, ScoreRecord, ScoringClient, ScoringError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::data_dir;

pub const SCORE_FILE_NAME: &str = "scores.json";
pub const SCORE_FILE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ScoreFileError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredScore {
    pub name: String,
    pub time: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreFile {
    pub format_version: u32,
    pub scores: Vec<StoredScore>,
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self { format_version: SCORE_FILE_VERSION, scores: Vec::new() }
    }
}

impl ScoreFile {
    pub fn get_default_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join(SCORE_FILE_NAME))
    }

    pub fn write_atomic(&self, path: &Path) -> Result<(), ScoreFileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ScoreFileError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// A missing file is an empty score list.
    pub fn load_or_default(path: &Path) -> Result<Self, ScoreFileError> {
        match Self::load(path) {
            Err(ScoreFileError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Rows that no longer pass record validation are skipped.
    pub fn to_leaderboard(&self) -> Leaderboard {
        let mut leaderboard = Leaderboard::new();
        for stored in &self.scores {
            let record = PlayerName::new(&stored.name)
                .and_then(|name| ScoreRecord::new(name, stored.time));
            match record {
                Ok(record) => leaderboard.record(record),
                Err(err) => warn!(name = %stored.name, error = %err, "skipping stored score"),
            }
        }
        leaderboard
    }

    pub fn push(&mut self, record: &ScoreRecord) {
        self.scores.push(StoredScore {
            name: record.name().as_str().to_string(),
            time: record.time_seconds(),
        });
    }
}

/// `ScoringClient` over a [`ScoreFile`]. Without a path it keeps scores in
/// memory only.
pub struct FileScoringClient {
    path: Option<PathBuf>,
    file: ScoreFile,
    leaderboard: Leaderboard,
}

impl FileScoringClient {
    pub fn open(path: PathBuf) -> Result<Self, ScoreFileError> {
        let file = ScoreFile::load_or_default(&path)?;
        let leaderboard = file.to_leaderboard();
        debug!(path = %path.display(), scores = leaderboard.len(), "score file opened");
        Ok(Self { path: Some(path), file, leaderboard })
    }

    pub fn in_memory() -> Self {
        Self { path: None, file: ScoreFile::default(), leaderboard: Leaderboard::new() }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}

impl ScoringClient for FileScoringClient {
    fn submit_score(&mut self, record: &ScoreRecord) -> Result<(), ScoringError> {
        self.leaderboard.record(record.clone());
        self.file.push(record);
        match &self.path {
            Some(path) => {
                self.file.write_atomic(path).map_err(|err| ScoringError::Storage(err.to_string()))
            }
            None => Ok(()),
        }
    }

    fn fetch_leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>, ScoringError> {
        Ok(self.leaderboard.ranked())
    }
}
