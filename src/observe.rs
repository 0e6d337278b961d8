//! Snapshot observer: streams game snapshots as JSON lines.
//!
//! When `MEMORY_SNAPSHOT_PATH` is set, the runner appends one JSON object per
//! state change. External tools can tail the file to follow a game without
//! touching the terminal the game draws on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameSnapshot;

/// One line of observer output
#[derive(Debug, Serialize)]
pub struct ObservedFrame<'a> {
    pub screen: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<&'a GameSnapshot>,
    pub records: &'a [u32],
}

/// Owned copy of the last frame written, kept for comparison.
#[derive(Debug, Default)]
struct LastFrame {
    screen: String,
    game: Option<GameSnapshot>,
    records: Vec<u32>,
}

impl LastFrame {
    fn matches(&self, frame: &ObservedFrame<'_>) -> bool {
        self.screen == frame.screen
            && self.game.as_ref() == frame.game
            && self.records == frame.records
    }

    fn store(&mut self, frame: &ObservedFrame<'_>) {
        self.screen.clear();
        self.screen.push_str(frame.screen);
        match (&mut self.game, frame.game) {
            (Some(kept), Some(game)) => kept.clone_from(game),
            (kept, game) => *kept = game.cloned(),
        }
        self.records.clear();
        self.records.extend_from_slice(frame.records);
    }
}

/// Writes frames to any sink, skipping frames equal to the last one written.
///
/// Frames are compared field by field; JSON is only built for frames that
/// will be written.
pub struct SnapshotObserver<W: Write> {
    out: W,
    last: Option<LastFrame>,
}

impl SnapshotObserver<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open snapshot file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Write `frame` unless it matches the previous one. Returns whether a
    /// line was written.
    pub fn observe(&mut self, frame: &ObservedFrame<'_>) -> Result<bool> {
        if self.last.as_ref().is_some_and(|last| last.matches(frame)) {
            return Ok(false);
        }

        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.last.get_or_insert_with(LastFrame::default).store(frame);
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
