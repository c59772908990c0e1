//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard 52-card deck.
///
/// The deck is built in a fixed order (suit-major, Ace through King) and
/// drawn from the front without replacement. Shuffle it before drawing if a
/// random order is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, front of the deck first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck with one card per suit and rank combination.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Uniformly shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if all cards have been drawn.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards, front of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
