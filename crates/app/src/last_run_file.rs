//! The journal of the most recently finished run, kept for `maze-replay`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::InputJournal;

use crate::data_dir;

pub const LAST_RUN_FILE_NAME: &str = "last_run.json";

pub fn get_default_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(LAST_RUN_FILE_NAME))
}

pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
