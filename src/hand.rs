//! Five-card hand representation.

use crate::card::Card;
use crate::error::HandError;
use crate::eval::{self, HandCategory};

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A five-card poker hand.
///
/// Cards may be in any order; evaluation never assumes sortedness. The
/// fixed-size array makes the five-card invariant structural, and
/// [`Hand::try_from`] is the validating entry for slices of unknown length.
/// Card uniqueness is the caller's responsibility (drawing from a single
/// [`Deck`](crate::Deck) guarantees it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from exactly five cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Evaluates the hand into its poker category.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Hand, HandCategory, Rank, Suit};
    ///
    /// let hand = Hand::new([
    ///     Card::new(Suit::Hearts, Rank::Seven),
    ///     Card::new(Suit::Clubs, Rank::Seven),
    ///     Card::new(Suit::Spades, Rank::Two),
    ///     Card::new(Suit::Diamonds, Rank::Nine),
    ///     Card::new(Suit::Hearts, Rank::King),
    /// ]);
    /// assert_eq!(hand.category(), HandCategory::Pair);
    /// ```
    #[must_use]
    pub fn category(&self) -> HandCategory {
        eval::rank_hand(self)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    /// Builds a hand from a slice, rejecting any length other than five.
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongSize { len: cards.len() })?;
        Ok(Self::new(cards))
    }
}
