//! Hands and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// The score above which a hand is bust.
pub const BLACKJACK: u16 = 21;

/// Points removed when an Ace is demoted from 11 to 1.
const ACE_ADJUSTMENT: u16 = 10;

/// Scores a sequence of cards.
///
/// Every card counts its point value with Aces at 11. Then, once per Ace, the
/// total drops by 10 while it is above 21. An empty slice scores 0.
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    let mut total: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.point_value());
    }

    while total > BLACKJACK && aces > 0 {
        total -= ACE_ADJUSTMENT;
        aces -= 1;
    }

    total
}

/// An ordered hand of cards held by one participant.
///
/// Hands only grow by appending; the face-down flags of held cards can be
/// cleared with [`Hand::revealed`]. Unlike [`Card`], two hands are equal only
/// when their cards also match in visibility.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns a copy of this hand with `card` appended.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(card);
        Self { cards }
    }

    /// Returns a copy of this hand with every card face up.
    #[must_use]
    pub fn revealed(&self) -> Self {
        Self {
            cards: self.cards.iter().map(|card| card.turned_up()).collect(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores every card in the hand, face down or not.
    #[must_use]
    pub fn value(&self) -> u16 {
        score(&self.cards)
    }

    /// Scores only the face-up cards.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| !card.face_down)
            .copied()
            .collect();
        score(&visible)
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| card.face_down)
    }

    /// Returns whether the full hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(&other.cards)
                .all(|(a, b)| a == b && a.face_down == b.face_down)
    }
}

impl Eq for Hand {}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
