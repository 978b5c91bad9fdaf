//! Player intents accepted by the game.

use core::str::FromStr;

use crate::error::ParseActionError;

/// A participant at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// An intent applied to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a round on a freshly shuffled deck.
    Deal,
    /// Draw one card for a participant.
    Draw(Participant),
    /// End the player's turn and let the dealer play out.
    FinishTurn,
    /// Leave the table, keeping the history.
    Quit,
    /// Start over with a fresh deck and empty hands.
    Reset,
    /// Forget all recorded rounds.
    ClearHistory,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Action); 10] = [
            ("deal", Action::Deal),
            ("hit", Action::Draw(Participant::Player)),
            ("draw", Action::Draw(Participant::Player)),
            ("dealer-hit", Action::Draw(Participant::Dealer)),
            ("stand", Action::FinishTurn),
            ("finish", Action::FinishTurn),
            ("quit", Action::Quit),
            ("new", Action::Reset),
            ("reset", Action::Reset),
            ("clear-history", Action::ClearHistory),
        ];

        let name = s.trim();
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, action)| action)
            .ok_or(ParseActionError::Unknown)
    }
}
