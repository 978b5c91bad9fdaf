//! Capped, most-recent-first record of finished rounds.

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HistoryError;
use crate::outcome::Outcome;
use crate::store::Store;

/// Key the history is stored under.
pub const HISTORY_KEY: &str = "blackjack-history";

/// Maximum number of rounds kept.
pub const MAX_HISTORY: usize = 25;

/// Display format of [`HistoryEntry::timestamp`].
const TIMESTAMP_FORMAT: &str = "%d/%m, %H:%M";

/// One finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-derived identifier, increasing with each recorded round.
    pub id: u64,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
    /// The round's result.
    pub result: Outcome,
    /// When the round finished, formatted for display.
    pub timestamp: String,
}

impl HistoryEntry {
    /// Builds an entry for a round finished at `at`.
    ///
    /// The id is the instant in milliseconds, bumped past the newest entry of
    /// `current` when the clock has not moved on.
    #[must_use]
    pub fn new(
        at: DateTime<Utc>,
        player_score: u16,
        dealer_score: u16,
        result: Outcome,
        current: &[Self],
    ) -> Self {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let id = current
            .first()
            .map_or(millis, |newest| millis.max(newest.id.saturating_add(1)));

        Self {
            id,
            player_score,
            dealer_score,
            result,
            timestamp: alloc::format!("{}", at.format(TIMESTAMP_FORMAT)),
        }
    }
}

/// Write-through history ledger over a [`Store`].
///
/// Storage failures never reach the caller: reads fall back to an empty list
/// and writes are logged and dropped while the in-memory list stays current.
#[derive(Debug)]
pub struct HistoryLedger<S> {
    store: S,
    limit: usize,
}

impl<S: Store> HistoryLedger<S> {
    /// Creates a ledger keeping at most `limit` entries, capped at
    /// [`MAX_HISTORY`].
    pub const fn new(store: S, limit: usize) -> Self {
        let limit = if limit < MAX_HISTORY {
            limit
        } else {
            MAX_HISTORY
        };
        Self { store, limit }
    }

    /// Returns the entry cap.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted history.
    ///
    /// Missing or unreadable data yields an empty list. A list longer than the
    /// cap is cut to its newest entries.
    pub fn load(&self) -> Vec<HistoryEntry> {
        match self.read() {
            Ok(mut history) => {
                history.truncate(self.limit);
                debug!(entries = history.len(), "history loaded");
                history
            }
            Err(err) => {
                warn!(%err, "failed to load history; starting empty");
                Vec::new()
            }
        }
    }

    /// Prepends `entry` to `current`, caps the list and writes it through.
    pub fn record(&mut self, entry: HistoryEntry, current: &[HistoryEntry]) -> Vec<HistoryEntry> {
        let mut history = Vec::with_capacity((current.len() + 1).min(self.limit));
        history.push(entry);
        history.extend_from_slice(current);
        history.truncate(self.limit);

        self.persist(&history);
        history
    }

    /// Persists and returns an empty history.
    pub fn clear(&mut self) -> Vec<HistoryEntry> {
        let history = Vec::new();
        self.persist(&history);
        history
    }

    fn read(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&mut self, history: &[HistoryEntry]) -> Result<(), HistoryError> {
        let raw = serde_json::to_string(history)?;
        self.store.set(HISTORY_KEY, &raw)?;
        Ok(())
    }

    fn persist(&mut self, history: &[HistoryEntry]) {
        if let Err(err) = self.write(history) {
            warn!(%err, entries = history.len(), "failed to save history");
        }
    }
}
