//! History ledger tests.

use chrono::DateTime;
use solojack::{
    FileStore, HISTORY_KEY, HistoryEntry, HistoryLedger, MAX_HISTORY, MemoryStore, Outcome,
    Store, StoreError,
};

fn entry(id: u64) -> HistoryEntry {
    HistoryEntry {
        id,
        player_score: 20,
        dealer_score: 18,
        result: Outcome::Win,
        timestamp: "14/11, 22:13".to_string(),
    }
}

/// Store whose reads and writes always fail.
struct BrokenStore;

impl Store for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("disk full".to_string()))
    }
}

#[test]
fn record_keeps_most_recent_entries() {
    let mut store = MemoryStore::new();
    let mut ledger = HistoryLedger::new(&mut store, MAX_HISTORY);

    let mut history = ledger.load();
    for id in 0..30 {
        history = ledger.record(entry(id), &history);
    }

    assert_eq!(history.len(), MAX_HISTORY);
    let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
    let expected: Vec<u64> = (5..30).rev().collect();
    assert_eq!(ids, expected);

    drop(ledger);
    let raw = store.get(HISTORY_KEY).unwrap().unwrap();
    let persisted: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, history);
}

#[test]
fn persisted_format_uses_camel_case_fields() {
    let mut store = MemoryStore::new();
    let mut ledger = HistoryLedger::new(&mut store, MAX_HISTORY);
    ledger.record(entry(7), &[]);
    drop(ledger);

    let raw = store.get(HISTORY_KEY).unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"id":7,"playerScore":20,"dealerScore":18,"result":"Win","timestamp":"14/11, 22:13"}]"#
    );
}

#[test]
fn load_missing_history_is_empty() {
    let ledger = HistoryLedger::new(MemoryStore::new(), MAX_HISTORY);
    assert!(ledger.load().is_empty());
}

#[test]
fn load_malformed_history_is_empty() {
    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, "{not json").unwrap();
    let ledger = HistoryLedger::new(store, MAX_HISTORY);
    assert!(ledger.load().is_empty());

    let mut store = MemoryStore::new();
    store.set(HISTORY_KEY, r#"[{"id":"x"}]"#).unwrap();
    let ledger = HistoryLedger::new(store, MAX_HISTORY);
    assert!(ledger.load().is_empty());
}

#[test]
fn load_truncates_oversized_history() {
    let stored: Vec<HistoryEntry> = (0..40).rev().map(entry).collect();
    let mut store = MemoryStore::new();
    store
        .set(HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
        .unwrap();

    let history = HistoryLedger::new(store, MAX_HISTORY).load();
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history[0].id, 39);
}

#[test]
fn store_failures_do_not_block_recording() {
    let mut ledger = HistoryLedger::new(BrokenStore, 3);
    assert!(ledger.load().is_empty());

    let mut history = Vec::new();
    for id in 0..5 {
        history = ledger.record(entry(id), &history);
    }
    assert_eq!(history.iter().map(|e| e.id).collect::<Vec<_>>(), [4, 3, 2]);
    assert!(ledger.clear().is_empty());
}

#[test]
fn clear_persists_empty_list() {
    let mut store = MemoryStore::new();
    let mut ledger = HistoryLedger::new(&mut store, MAX_HISTORY);
    let history = ledger.record(entry(1), &[]);
    assert_eq!(history.len(), 1);

    assert!(ledger.clear().is_empty());
    assert!(ledger.load().is_empty());
    assert_eq!(
        ledger.store().get(HISTORY_KEY).unwrap().as_deref(),
        Some("[]")
    );
    drop(ledger);
    assert_eq!(store.get(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn limit_above_cap_is_clamped() {
    let mut ledger = HistoryLedger::new(MemoryStore::new(), 40);
    assert_eq!(ledger.limit(), MAX_HISTORY);

    let mut history = Vec::new();
    for id in 0..30 {
        history = ledger.record(entry(id), &history);
    }
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(ledger.load().len(), MAX_HISTORY);

    assert_eq!(HistoryLedger::new(MemoryStore::new(), 3).limit(), 3);
}

#[test]
fn entry_ids_stay_ahead_of_newest() {
    let at = DateTime::from_timestamp_millis(1_000).unwrap();

    let first = HistoryEntry::new(at, 20, 19, Outcome::Win, &[]);
    assert_eq!(first.id, 1_000);
    assert_eq!(first.timestamp, "01/01, 00:00");

    let second = HistoryEntry::new(at, 15, 19, Outcome::Lose, &[first.clone()]);
    assert_eq!(second.id, 1_001);

    let later = DateTime::from_timestamp_millis(5_000).unwrap();
    let third = HistoryEntry::new(later, 15, 15, Outcome::Push, &[second, first]);
    assert_eq!(third.id, 5_000);
}

#[test]
fn file_store_round_trip() {
    let dir = std::env::temp_dir().join(format!("solojack-history-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut ledger = HistoryLedger::new(FileStore::new(&dir), MAX_HISTORY);
    assert!(ledger.load().is_empty());
    let history = ledger.record(entry(3), &[]);
    let history = ledger.record(entry(4), &history);

    let reopened = HistoryLedger::new(FileStore::new(&dir), MAX_HISTORY);
    assert_eq!(reopened.load(), history);
    assert!(dir.join(format!("{HISTORY_KEY}.json")).exists());

    let _ = std::fs::remove_dir_all(&dir);
}
