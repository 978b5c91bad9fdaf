//! Round outcomes and the rules that decide them.

use serde::{Deserialize, Serialize};

use crate::hand::BLACKJACK;

/// Final result of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player wins (dealer busts, player has the higher score, or a favoured tie).
    Win,
    /// Player loses (player busts or dealer has the higher score).
    Lose,
    /// Tie with neither side winning.
    Push,
}

impl Outcome {
    /// Returns the outcome name as stored in the history.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Push => "Push",
        }
    }
}

/// How equal, non-bust scores are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiePolicy {
    /// Ties go to the player.
    PlayerWins,
    /// Ties are a push.
    Push,
}

/// The table's tie policy.
pub const TIE_POLICY: TiePolicy = TiePolicy::PlayerWins;

/// Resolves final scores under [`TIE_POLICY`].
///
/// # Example
///
/// ```
/// use solojack::{Outcome, resolve};
///
/// assert_eq!(resolve(22, 20), Outcome::Lose);
/// assert_eq!(resolve(18, 24), Outcome::Win);
/// assert_eq!(resolve(20, 20), Outcome::Win);
/// ```
#[must_use]
pub const fn resolve(player_score: u16, dealer_score: u16) -> Outcome {
    resolve_with(TIE_POLICY, player_score, dealer_score)
}

/// Resolves final scores under an explicit tie policy.
///
/// A player bust loses before anything else is looked at, then a dealer bust
/// wins, then ties follow `policy`, then the higher score wins.
#[must_use]
pub const fn resolve_with(policy: TiePolicy, player_score: u16, dealer_score: u16) -> Outcome {
    if player_score > BLACKJACK {
        return Outcome::Lose;
    }
    if dealer_score > BLACKJACK {
        return Outcome::Win;
    }
    if player_score == dealer_score {
        return match policy {
            TiePolicy::PlayerWins => Outcome::Win,
            TiePolicy::Push => Outcome::Push,
        };
    }
    if player_score > dealer_score {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
