//! Error types for persistence and intent parsing.

use alloc::string::String;

use thiserror::Error;

/// Errors reported by a persistence store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store cannot be reached at all.
    #[error("store is unavailable")]
    Unavailable,
    /// The backing medium failed.
    #[error("store backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur while reading or writing the round history.
///
/// The ledger never hands these to callers; they are logged and the history
/// falls back to what is held in memory.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The persisted history could not be decoded or encoded.
    #[error("malformed history: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors that can occur when parsing an intent name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The name matches no known intent.
    #[error("unknown action")]
    Unknown,
}
