use std::cell::RefCell;

use super::*;
use crate::state::history::HistoryState;

/// In-memory stand-in for `localStorage`, exercising the same encode/decode
/// path as the browser store.
#[derive(Default)]
struct MemoryHistoryStore {
    raw: RefCell<Option<String>>,
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.raw
            .borrow()
            .as_deref()
            .map(decode_history)
            .unwrap_or_default()
    }

    fn save(&self, entries: &[HistoryEntry]) {
        *self.raw.borrow_mut() = Some(encode_history(entries));
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

fn entry(id: i64) -> HistoryEntry {
    HistoryEntry {
        id,
        timestamp: "2026-08-29T12:00:00.000Z".to_owned(),
        prompt: format!("prompt {id}"),
        images: vec![format!("image-{id}"), format!("image-{id}-b")],
        seed: 987_654_321,
        model: "Stable Diffusion v1.5".to_owned(),
        sampling_steps: 20,
        cfg_scale: 7.5,
        width: 512,
        height: 512,
        aesthetic_scores: Some(vec![6.21, 5.94]),
    }
}

// =============================================================
// encode/decode round-trip
// =============================================================

#[test]
fn round_trip_preserves_order_and_content() {
    let entries: Vec<_> = (0..5).map(entry).collect();
    let decoded = decode_history(&encode_history(&entries));
    assert_eq!(decoded, entries);
}

#[test]
fn decode_rejects_malformed_data_as_empty() {
    assert!(decode_history("").is_empty());
    assert!(decode_history("not json").is_empty());
    assert!(decode_history(r#"{"entries": 3}"#).is_empty());
    assert!(decode_history(r#"[{"id": "wrong-type"}]"#).is_empty());
}

#[test]
fn decode_truncates_oversized_stored_list() {
    let entries: Vec<_> = (0..70).map(entry).collect();
    let raw = serde_json::to_string(&entries).expect("encode");
    assert_eq!(decode_history(&raw).len(), HISTORY_LIMIT);
}

#[test]
fn encode_caps_before_writing() {
    let entries: Vec<_> = (0..70).map(entry).collect();
    let decoded = decode_history(&encode_history(&entries));
    assert_eq!(decoded.len(), HISTORY_LIMIT);
}

// =============================================================
// store behavior through the port
// =============================================================

#[test]
fn store_round_trip_yields_identical_list() {
    let store = MemoryHistoryStore::default();
    let mut history = HistoryState::default();
    for id in 0..10 {
        history.prepend(entry(id));
    }
    store.save(&history.entries);

    let reloaded = store.load();
    assert_eq!(reloaded, history.entries);
    assert_eq!(reloaded[0].id, 9);
}

#[test]
fn store_load_before_any_save_is_empty() {
    let store = MemoryHistoryStore::default();
    assert!(store.load().is_empty());
}

#[test]
fn clear_persists_an_empty_list() {
    let store = MemoryHistoryStore::default();
    let full: Vec<_> = (0..HISTORY_LIMIT as i64).map(entry).collect();
    store.save(&full);
    assert_eq!(store.load().len(), HISTORY_LIMIT);

    store.clear();
    assert!(store.load().is_empty());
}

#[test]
fn local_store_is_inert_outside_the_browser() {
    let store = LocalHistoryStore;
    store.save(&[entry(1)]);
    assert!(store.load().is_empty());
}
