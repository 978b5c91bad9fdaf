use alloc::vec::Vec;

use crate::action::Participant;
use crate::card::Card;
use crate::hand::Hand;
use crate::history::HistoryEntry;

use super::{GameState, Status};

impl GameState {
    /// Deals a round from `deck`: player, dealer (face down), player, dealer.
    pub(crate) fn dealt(&self, deck: Vec<Card>) -> Self {
        let mut pile = deck.into_iter();
        let mut player = Vec::with_capacity(2);
        let mut dealer = Vec::with_capacity(2);

        for seat in 0..4 {
            let Some(card) = pile.next() else {
                break;
            };
            match seat {
                0 | 2 => player.push(card.turned_up()),
                1 => dealer.push(card.turned_down()),
                _ => dealer.push(card.turned_up()),
            }
        }

        Self {
            draw_pile: pile.collect(),
            player_hand: Hand::from(player),
            dealer_hand: Hand::from(dealer),
            status: Status::Playing,
            history: self.history.clone(),
        }
    }

    /// Moves the front card of the pile into `who`'s hand, face up.
    ///
    /// Returns `None` when the pile is empty.
    pub(crate) fn take_card(&self, who: Participant) -> Option<Self> {
        let (card, rest) = self.draw_pile.split_first()?;
        let card = card.turned_up();

        let mut next = Self {
            draw_pile: rest.to_vec(),
            player_hand: self.player_hand.clone(),
            dealer_hand: self.dealer_hand.clone(),
            status: self.status,
            history: self.history.clone(),
        };
        match who {
            Participant::Player => next.player_hand = self.player_hand.with_card(card),
            Participant::Dealer => next.dealer_hand = self.dealer_hand.with_card(card),
        }
        Some(next)
    }

    /// Draws for `who` while a round is in progress; otherwise unchanged.
    pub(crate) fn drawn(&self, who: Participant) -> Self {
        if self.status != Status::Playing {
            return self.clone();
        }
        self.take_card(who).unwrap_or_else(|| self.clone())
    }

    /// Leaves the table: empty pile and hands, idle, history kept.
    pub(crate) fn quit(&self) -> Self {
        Self::new(Vec::new(), self.history.clone())
    }

    /// Starts over on `deck` with empty hands, ready to draw.
    pub(crate) fn restarted(&self, deck: Vec<Card>) -> Self {
        Self {
            draw_pile: deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            status: Status::Playing,
            history: self.history.clone(),
        }
    }

    /// Turns every dealer card face up.
    pub(crate) fn revealed(&self) -> Self {
        Self {
            dealer_hand: self.dealer_hand.revealed(),
            ..self.clone()
        }
    }

    /// Replaces the history, leaving everything else alone.
    pub(crate) fn with_history(&self, history: Vec<HistoryEntry>) -> Self {
        Self {
            history,
            ..self.clone()
        }
    }

    /// Closes the round with a terminal status and the updated history.
    pub(crate) fn settled(&self, status: Status, history: Vec<HistoryEntry>) -> Self {
        Self {
            status,
            history,
            ..self.clone()
        }
    }
}
