//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::history::HistoryEntry;
use crate::outcome::Outcome;

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No round started, or the player quit.
    #[default]
    Idle,
    /// A round is in progress.
    Playing,
    /// The player won the round.
    Win,
    /// The player lost the round.
    Lose,
    /// The round was a tie.
    Push,
}

impl Status {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose | Self::Push)
    }

    /// Returns the outcome of a finished round.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Win => Some(Outcome::Win),
            Self::Lose => Some(Outcome::Lose),
            Self::Push => Some(Outcome::Push),
            Self::Idle | Self::Playing => None,
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::Win,
            Outcome::Lose => Self::Lose,
            Outcome::Push => Self::Push,
        }
    }
}

/// Snapshot of one session's table.
///
/// Snapshots are never edited in place; every transition builds a new one.
/// Scores are derived from the hands on each call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(crate) draw_pile: Vec<Card>,
    pub(crate) player_hand: Hand,
    pub(crate) dealer_hand: Hand,
    pub(crate) status: Status,
    pub(crate) history: Vec<HistoryEntry>,
}

impl GameState {
    /// Creates an idle table over `draw_pile` with a loaded history.
    #[must_use]
    pub const fn new(draw_pile: Vec<Card>, history: Vec<HistoryEntry>) -> Self {
        Self {
            draw_pile,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            status: Status::Idle,
            history,
        }
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player_hand.value()
    }

    /// Returns the dealer's score over face-up cards only.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer_hand.visible_value()
    }

    /// Returns the round status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the recorded rounds, newest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
