//! Generation history: a prepend-capped list persisted to local storage.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept; older ones fall off the end.
pub const HISTORY_LIMIT: usize = 50;

/// One past generation: the result's images plus enough metadata to show
/// and replay it. The id is the creation time in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    /// ISO-8601 creation time.
    pub timestamp: String,
    pub prompt: String,
    pub images: Vec<String>,
    pub seed: i64,
    pub model: String,
    pub sampling_steps: u32,
    pub cfg_scale: f64,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub aesthetic_scores: Option<Vec<f64>>,
}

/// Ordered history, newest first. Never exceeds [`HISTORY_LIMIT`] entries.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    /// Whether the history panel is expanded.
    pub visible: bool,
}

impl HistoryState {
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut state = Self {
            entries,
            visible: false,
        };
        state.entries.truncate(HISTORY_LIMIT);
        state
    }

    /// Insert a new entry at the front and drop anything beyond the cap.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}
