use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::action::Participant;
use crate::clock::Clock;
use crate::hand::BLACKJACK;
use crate::history::HistoryEntry;
use crate::outcome::resolve_with;
use crate::shuffle::Shuffler;
use crate::store::Store;

use super::{Game, GameState, Status};

impl<S: Store, R: Shuffler, C: Clock> Game<S, R, C> {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer's cards are revealed, then the dealer draws while below
    /// `dealer_stands_at` and the pile lasts. Returns every intermediate
    /// table: the reveal, one per dealer draw, and the settled round last.
    /// Outside of [`Status::Playing`] the only frame is `current` itself.
    pub(super) fn play_out(&self, current: &GameState) -> Vec<GameState> {
        if current.status() != Status::Playing {
            debug!(status = ?current.status(), "finish turn ignored; round not in progress");
            return vec![current.clone()];
        }

        let mut table = current.revealed();
        let mut frames = vec![table.clone()];

        while table.dealer_score() < self.options.dealer_stands_at {
            let Some(next) = table.take_card(Participant::Dealer) else {
                debug!(dealer_score = table.dealer_score(), "draw pile exhausted during dealer play");
                break;
            };
            table = next;
            frames.push(table.clone());
        }

        frames.push(self.settle(&table));
        frames
    }

    /// Settles the round early when the player has reached 21.
    pub(super) fn settle_on_twenty_one(&self, table: GameState) -> GameState {
        if self.options.settle_on_twenty_one
            && table.status() == Status::Playing
            && table.player_score() >= BLACKJACK
        {
            self.settle(&table)
        } else {
            table
        }
    }

    /// Reveals the dealer, resolves the scores and records the round.
    fn settle(&self, table: &GameState) -> GameState {
        let table = table.revealed();
        let player_score = table.player_score();
        let dealer_score = table.dealer_score();
        let outcome = resolve_with(self.options.tie_policy, player_score, dealer_score);

        let entry = HistoryEntry::new(
            self.clock.now(),
            player_score,
            dealer_score,
            outcome,
            table.history(),
        );
        let history = self.ledger.lock().record(entry, table.history());

        info!(player_score, dealer_score, result = outcome.as_str(), "round settled");

        table.settled(outcome.into(), history)
    }
}
