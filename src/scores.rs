//! On-disk score book: one JSON file holding every recorded win.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::common::GameMode;

/// Default score file, created in the working directory.
pub const DEFAULT_SCORE_FILE: &str = "mazecrawl_scores.json";

/// A single persisted win. The engine supplies every field except
/// `player_name` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub player_number: u8,
    pub score: u32,
    pub moves: u32,
    pub time_taken_secs: u64,
    pub seed: i64,
    pub maze_size: usize,
    pub mode: GameMode,
    pub timestamp: String,
}

/// Local timestamp in the score file's format.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Score records backed by a JSON file.
pub struct ScoreBook {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl ScoreBook {
    /// Open the book at `path`, loading any existing records. A missing or
    /// corrupt file starts an empty book rather than failing.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(records) => records,
                Err(err) => {
                    warn!("score file {} is corrupt: {err}", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        ScoreBook { path, records }
    }

    /// Append a record and rewrite the file.
    pub fn append(&mut self, record: ScoreRecord) -> io::Result<()> {
        self.records.push(record);
        self.write()
    }

    /// All records, oldest first.
    pub fn all(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Records for one player, oldest first.
    pub fn player_records(&self, name: &str) -> Vec<&ScoreRecord> {
        self.records
            .iter()
            .filter(|r| r.player_name == name)
            .collect()
    }

    /// Drop all records for one player and rewrite the file.
    pub fn clear_player(&mut self, name: &str) -> io::Result<()> {
        self.records.retain(|r| r.player_name != name);
        self.write()
    }

    fn write(&self) -> io::Result<()> {
        let text = serde_json::to_string_pretty(&self.records).map_err(io::Error::other)?;
        fs::write(&self.path, text)
    }
}
