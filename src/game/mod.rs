//! Game engine and state management.

use alloc::vec::Vec;

use tracing::debug;

use crate::sync::Mutex;

use crate::action::{Action, Participant};
use crate::card::{Card, new_shuffled_deck};
use crate::clock::Clock;
use crate::history::{HistoryEntry, HistoryLedger};
use crate::options::GameOptions;
use crate::shuffle::Shuffler;
use crate::store::Store;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, Status};

/// A single-player blackjack table.
///
/// The game owns the current [`GameState`], the history ledger and the
/// capabilities it needs: a [`Shuffler`] for decks, a [`Store`] for the
/// history and a [`Clock`] for stamping finished rounds. Actions are applied
/// one at a time; each builds a new state from the current one and replaces
/// it whole.
pub struct Game<S, R, C> {
    /// Current table.
    state: Mutex<GameState>,
    /// Game options.
    options: GameOptions,
    /// Round history, written through to the store.
    ledger: Mutex<HistoryLedger<S>>,
    /// Deck permutation source.
    shuffler: Mutex<R>,
    /// Time source for history entries.
    clock: C,
}

impl<S: Store, R: Shuffler, C: Clock> Game<S, R, C> {
    /// Creates an idle game with a freshly shuffled pile and the history
    /// loaded from `store`.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::{Game, GameOptions, ManualClock, MemoryStore, SeededShuffler, Status};
    ///
    /// let game = Game::new(
    ///     GameOptions::default(),
    ///     MemoryStore::new(),
    ///     SeededShuffler::new(42),
    ///     ManualClock::new(0),
    /// );
    /// assert_eq!(game.status(), Status::Idle);
    /// assert_eq!(game.state().draw_pile().len(), 52);
    /// ```
    pub fn new(options: GameOptions, store: S, mut shuffler: R, clock: C) -> Self {
        let ledger = HistoryLedger::new(store, options.history_limit);
        let history = ledger.load();
        let pile = new_shuffled_deck(&mut shuffler);

        Self {
            state: Mutex::new(GameState::new(pile, history)),
            options,
            ledger: Mutex::new(ledger),
            shuffler: Mutex::new(shuffler),
            clock,
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns a snapshot of the current table.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current round status.
    pub fn status(&self) -> Status {
        self.state.lock().status()
    }

    /// Returns the recorded rounds, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.lock().history().to_vec()
    }

    /// Applies an action and returns the new table.
    ///
    /// Actions that do not apply in the current status leave the table
    /// unchanged.
    pub fn apply(&self, action: Action) -> GameState {
        self.state.transition(|current| {
            let next = self.next(current, action);
            (next.clone(), next)
        })
    }

    /// Applies an action given by name. Unknown names change nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::{Game, GameOptions, ManualClock, MemoryStore, SeededShuffler, Status};
    ///
    /// let game = Game::new(
    ///     GameOptions::default(),
    ///     MemoryStore::new(),
    ///     SeededShuffler::new(7),
    ///     ManualClock::new(0),
    /// );
    /// assert_eq!(game.dispatch_named("deal").status(), Status::Playing);
    /// assert_eq!(game.dispatch_named("split").status(), Status::Playing);
    /// ```
    pub fn dispatch_named(&self, name: &str) -> GameState {
        match name.parse::<Action>() {
            Ok(action) => self.apply(action),
            Err(err) => {
                debug!(name, %err, "ignoring action");
                self.state()
            }
        }
    }

    /// Deals a new round on a freshly shuffled deck.
    pub fn deal(&self) -> GameState {
        self.apply(Action::Deal)
    }

    /// Draws one card for `who` while a round is in progress.
    pub fn draw(&self, who: Participant) -> GameState {
        self.apply(Action::Draw(who))
    }

    /// Ends the player's turn, plays out the dealer and settles the round.
    pub fn finish_turn(&self) -> GameState {
        self.apply(Action::FinishTurn)
    }

    /// Ends the player's turn like [`Game::finish_turn`], returning every
    /// intermediate table so the dealer's play can be shown step by step.
    ///
    /// The last frame is the committed state. When no round is in progress
    /// the single frame is the unchanged table.
    pub fn finish_turn_frames(&self) -> Vec<GameState> {
        self.state.transition(|current| {
            let frames = self.play_out(current);
            let last = frames.last().cloned().unwrap_or_else(|| current.clone());
            (last, frames)
        })
    }

    /// Leaves the table, keeping the history.
    pub fn quit(&self) -> GameState {
        self.apply(Action::Quit)
    }

    /// Starts over with a fresh deck and empty hands.
    pub fn reset(&self) -> GameState {
        self.apply(Action::Reset)
    }

    /// Clears the persisted and cached history.
    pub fn clear_history(&self) -> GameState {
        self.apply(Action::ClearHistory)
    }

    fn shuffled_deck(&self) -> Vec<Card> {
        new_shuffled_deck(&mut *self.shuffler.lock())
    }

    fn next(&self, current: &GameState, action: Action) -> GameState {
        let next = match action {
            Action::Deal => self.settle_on_twenty_one(current.dealt(self.shuffled_deck())),
            Action::Draw(Participant::Player) => {
                self.settle_on_twenty_one(current.drawn(Participant::Player))
            }
            Action::Draw(Participant::Dealer) => current.drawn(Participant::Dealer),
            Action::FinishTurn => self
                .play_out(current)
                .pop()
                .unwrap_or_else(|| current.clone()),
            Action::Quit => current.quit(),
            Action::Reset => current.restarted(self.shuffled_deck()),
            Action::ClearHistory => current.with_history(self.ledger.lock().clear()),
        };

        if next == *current {
            debug!(?action, status = ?current.status(), "action left table unchanged");
        } else {
            debug!(?action, status = ?next.status(), "action applied");
        }
        next
    }
}

#[cfg(feature = "std")]
impl<S: Store> Game<S, crate::shuffle::SeededShuffler, crate::clock::SystemClock> {
    /// Creates a game on the wall clock with a seeded shuffler.
    pub fn with_seed(options: GameOptions, store: S, seed: u64) -> Self {
        Self::new(
            options,
            store,
            crate::shuffle::SeededShuffler::new(seed),
            crate::clock::SystemClock,
        )
    }
}
