//! Output helpers for the command-line queries.
//!
//! Supports JSON printing and a CSV export of the leaderboard.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::debug;

use crate::analyzers::types::Leaderboard;

/// One exported leaderboard row.
#[derive(Debug, Serialize)]
pub struct LeaderboardRow<'a> {
    pub generated_at: DateTime<Utc>,
    pub rank: usize,
    pub faculty_id: &'a str,
    pub score: f64,
}

/// Writes `value` to stdout as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_json(&mut out, value)
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the leaderboard to a CSV file, replacing any existing file.
pub fn write_leaderboard_csv(path: &str, board: &Leaderboard) -> Result<()> {
    debug!(path, entries = board.len(), "Writing leaderboard CSV");
    let file = File::create(path)?;
    write_leaderboard(file, board, Utc::now())
}

fn write_leaderboard<W: Write>(
    out: W,
    board: &Leaderboard,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(out);

    for (i, (faculty_id, score)) in board.iter().enumerate() {
        writer.serialize(LeaderboardRow {
            generated_at,
            rank: i + 1,
            faculty_id,
            score: *score,
        })?;
    }
    writer.flush()?;

    Ok(())
}
