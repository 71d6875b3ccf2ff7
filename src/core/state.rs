//! Browser state management

use std::path::{Path, PathBuf};

use super::Phase;
use crate::listing::Entry;

/// Main browser state
///
/// Owned by the event loop; only the reducer in `handler::update` mutates it.
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Directory being browsed
    pub current_path: PathBuf,
    /// Listing of `current_path` (folders first, then images)
    pub entries: Vec<Entry>,
    /// Index of the highlighted entry
    pub cursor: usize,
    /// Terminal size as (width, height)
    pub viewport: (u16, u16),
    /// Status line text; empty when there is nothing to say
    pub status_message: String,
    /// Lifecycle phase
    pub phase: Phase,
    /// Bumped on every reload so late listings can be recognised
    pub generation: u64,
}

impl BrowserState {
    /// Create new state for `start`; the first listing is still to be loaded
    pub fn new(start: PathBuf) -> Self {
        Self {
            current_path: start,
            entries: Vec::new(),
            cursor: 0,
            viewport: (0, 0),
            status_message: String::new(),
            phase: Phase::Loading,
            generation: 0,
        }
    }

    /// Whether the quit transition has happened
    pub fn is_quitting(&self) -> bool {
        self.phase == Phase::Quitting
    }

    /// Entry under the cursor, if any
    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Full path of the entry under the cursor
    pub fn current_entry_path(&self) -> Option<PathBuf> {
        self.current_entry().map(|e| e.path_in(&self.current_path))
    }

    /// Move cursor up, stopping at the first entry
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down, stopping at the last entry
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Pull the cursor back inside the listing
    pub fn clamp_cursor(&mut self) {
        if self.entries.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len() - 1;
        }
    }

    /// Switch to `path` and enter Loading.
    ///
    /// Returns the generation the reload must carry.
    pub fn begin_navigation(&mut self, path: PathBuf) -> u64 {
        self.current_path = path;
        self.begin_reload()
    }

    /// Enter Loading for the current path
    pub fn begin_reload(&mut self) -> u64 {
        self.entries.clear();
        self.cursor = 0;
        self.status_message.clear();
        self.phase = Phase::Loading;
        self.generation += 1;
        self.generation
    }

    /// Accept a listing for `generation`.
    ///
    /// Returns false (and changes nothing) when the listing is stale.
    pub fn apply_listing(&mut self, generation: u64, path: &Path, entries: Vec<Entry>) -> bool {
        if generation != self.generation || path != self.current_path {
            return false;
        }
        self.entries = entries;
        self.clamp_cursor();
        if self.phase == Phase::Loading {
            self.phase = Phase::Ready;
        }
        true
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.status_message.clear();
    }
}
