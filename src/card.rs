//! Card types and deck utilities.

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::vec::Vec;

use crate::shuffle::Shuffler;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks in deck-construction order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the short label printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// Returns the point value of a rank.
///
/// Number cards count their face, court cards count 10 and an Ace counts 11
/// before any soft-hand adjustment.
#[must_use]
pub const fn point_value(rank: Rank) -> u16 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

/// A playing card.
///
/// Two cards are equal when rank and suit match; the face-down flag is
/// visibility state and takes no part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the card is currently dealt face down.
    pub face_down: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
        }
    }

    /// Returns the card's point value before Ace adjustment.
    #[must_use]
    pub const fn point_value(&self) -> u16 {
        point_value(self.rank)
    }

    /// Returns whether this card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns a copy of this card turned face down.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_down = true;
        self
    }

    /// Returns a copy of this card turned face up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_down = false;
        self
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            f.write_str("🂠")
        } else {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds one face-up card per (rank, suit) pair, suits outermost.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Builds a standard deck and permutes it with the given shuffler.
///
/// Every call constructs a new deck, so no ordering carries over from an
/// earlier call.
#[must_use]
pub fn new_shuffled_deck<R: Shuffler + ?Sized>(shuffler: &mut R) -> Vec<Card> {
    let mut cards = standard_deck();
    shuffler.shuffle(&mut cards);
    cards
}
