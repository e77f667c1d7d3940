//! Append-only JSONL turn log.
//!
//! One serialized `Turn` per line. `append` returns a result the
//! caller is free to ignore - the engine treats the log as a
//! best-effort sink and never lets a write failure reach the user.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::transcript::Turn;

/// Append-only conversation log store.
pub struct TurnLog {
    path: PathBuf,
}

impl TurnLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one turn record.
    pub fn append(&self, turn: &Turn) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let line = serde_json::to_string(turn)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Read all logged turns, skipping malformed lines.
    pub fn read_all(&self) -> std::io::Result<Vec<Turn>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut turns = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(turn) = serde_json::from_str::<Turn>(&line) {
                turns.push(turn);
            }
        }

        Ok(turns)
    }

    /// Read the most recent `n` turns, oldest first.
    pub fn read_recent(&self, n: usize) -> std::io::Result<Vec<Turn>> {
        let mut all = self.read_all()?;
        if all.len() > n {
            all.drain(..all.len() - n);
        }
        Ok(all)
    }
}
