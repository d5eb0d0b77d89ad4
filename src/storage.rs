//! History persistence port.
//!
//! The history list round-trips through one `localStorage` key as JSON on
//! every change and is parsed back once at startup. Malformed or missing
//! stored data is treated as an empty list, never an error. The
//! [`HistoryStore`] trait keeps the persistence seam swappable for a
//! non-browser target; encoding and decoding are pure so they test natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::history::{HISTORY_LIMIT, HistoryEntry};

/// The single durable key holding the serialized history list.
pub const HISTORY_KEY: &str = "ddpo_studio_history";

/// Key-value persistence port for the history list.
pub trait HistoryStore {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]);
    fn clear(&self);
}

/// Serialize a history list for storage. Anything beyond the cap is dropped
/// before encoding.
pub fn encode_history(entries: &[HistoryEntry]) -> String {
    let capped = &entries[..entries.len().min(HISTORY_LIMIT)];
    serde_json::to_string(capped).unwrap_or_else(|_| "[]".to_owned())
}

/// Parse a stored history list. Malformed input yields an empty list, and
/// an oversized list is truncated to the cap.
pub fn decode_history(raw: &str) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = serde_json::from_str(raw).unwrap_or_default();
    entries.truncate(HISTORY_LIMIT);
    entries
}

/// `localStorage`-backed store used by browser builds. Outside the browser
/// it loads nothing and saves nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalHistoryStore;

impl HistoryStore for LocalHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(raw)) = storage.get_item(HISTORY_KEY) {
                        return decode_history(&raw);
                    }
                }
            }
        }
        Vec::new()
    }

    fn save(&self, entries: &[HistoryEntry]) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(HISTORY_KEY, &encode_history(entries));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = entries;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(HISTORY_KEY);
                }
            }
        }
    }
}
