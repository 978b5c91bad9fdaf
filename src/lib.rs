//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives one table from deal to
//! outcome: shuffling, dealing, player and dealer draws, the dealer's
//! automatic play, scoring with soft Aces, and a capped history of finished
//! rounds written through to an injected [`Store`].
//!
//! # Example
//!
//! ```
//! use solojack::{Game, GameOptions, ManualClock, MemoryStore, Participant, SeededShuffler};
//!
//! let game = Game::new(
//!     GameOptions::default(),
//!     MemoryStore::new(),
//!     SeededShuffler::new(42),
//!     ManualClock::new(0),
//! );
//! game.deal();
//! game.draw(Participant::Player);
//! let table = game.finish_turn();
//! assert!(table.status().is_terminal());
//! assert_eq!(table.history().len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod clock;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
pub mod outcome;
pub mod shuffle;
pub mod store;
mod sync;

// Re-export main types
pub use action::{Action, Participant};
pub use card::{Card, DECK_SIZE, Rank, Suit, new_shuffled_deck, point_value, standard_deck};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use error::{HistoryError, ParseActionError, StoreError};
pub use game::{Game, GameState, Status};
pub use hand::{BLACKJACK, Hand, score};
pub use history::{HISTORY_KEY, HistoryEntry, HistoryLedger, MAX_HISTORY};
pub use options::{DEALER_MIN_SCORE, GameOptions};
pub use outcome::{Outcome, TIE_POLICY, TiePolicy, resolve, resolve_with};
pub use shuffle::{SeededShuffler, Shuffler, StackedShuffler};
#[cfg(feature = "std")]
pub use store::FileStore;
pub use store::{MemoryStore, Store};
