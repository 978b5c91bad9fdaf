//! Game configuration options.

use crate::history::MAX_HISTORY;
use crate::outcome::{TIE_POLICY, TiePolicy};

/// Score at which the dealer stops drawing.
pub const DEALER_MIN_SCORE: u16 = 17;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solojack::{GameOptions, TiePolicy};
///
/// let options = GameOptions::default()
///     .with_tie_policy(TiePolicy::Push)
///     .with_history_limit(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer draws while below this score.
    pub dealer_stands_at: u16,
    /// How equal scores are settled.
    pub tie_policy: TiePolicy,
    /// Maximum number of rounds kept in the history.
    pub history_limit: usize,
    /// Whether a player score of 21 or more settles the round right after a
    /// deal or a player draw.
    pub settle_on_twenty_one: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: DEALER_MIN_SCORE,
            tie_policy: TIE_POLICY,
            history_limit: MAX_HISTORY,
            settle_on_twenty_one: false,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u16) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the tie policy.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::{GameOptions, TiePolicy};
    ///
    /// let options = GameOptions::default().with_tie_policy(TiePolicy::Push);
    /// assert_eq!(options.tie_policy, TiePolicy::Push);
    /// ```
    #[must_use]
    pub const fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    /// Sets how many rounds the history keeps, at most [`MAX_HISTORY`].
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::{GameOptions, MAX_HISTORY};
    ///
    /// let options = GameOptions::default().with_history_limit(5);
    /// assert_eq!(options.history_limit, 5);
    ///
    /// let options = GameOptions::default().with_history_limit(40);
    /// assert_eq!(options.history_limit, MAX_HISTORY);
    /// ```
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = if limit < MAX_HISTORY {
            limit
        } else {
            MAX_HISTORY
        };
        self
    }

    /// Sets whether reaching 21 settles the round immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::GameOptions;
    ///
    /// let options = GameOptions::default().with_settle_on_twenty_one(true);
    /// assert!(options.settle_on_twenty_one);
    /// ```
    #[must_use]
    pub const fn with_settle_on_twenty_one(mut self, settle: bool) -> Self {
        self.settle_on_twenty_one = settle;
        self
    }
}
