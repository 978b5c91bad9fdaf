//! Injectable deck permutations.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A source of deck permutations.
pub trait Shuffler {
    /// Permutes the cards in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Uniform shuffler backed by a seeded `ChaCha8` generator.
///
/// The generator advances on every call, so successive decks are shuffled
/// independently of each other.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: ChaCha8Rng,
}

impl SeededShuffler {
    /// Creates a shuffler from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Deterministic shuffler that stacks chosen cards on top of the deck.
///
/// The listed cards are moved to the front in the given order; the remaining
/// cards keep their incoming order. Cards not present in the deck are skipped.
#[derive(Debug, Clone, Default)]
pub struct StackedShuffler {
    top: Vec<Card>,
}

impl StackedShuffler {
    /// Creates a shuffler that puts `top` first, in order.
    #[must_use]
    pub fn new(top: impl Into<Vec<Card>>) -> Self {
        Self { top: top.into() }
    }
}

impl Shuffler for StackedShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        let mut front = 0;
        for wanted in &self.top {
            if let Some(offset) = cards[front..].iter().position(|card| card == wanted) {
                cards[front..=front + offset].rotate_right(1);
                front += 1;
            }
        }
    }
}
