//! Error types for deck and hand operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not contain exactly five cards.
    #[error("a hand must contain exactly 5 cards, got {len}")]
    WrongSize {
        /// Number of cards that were supplied.
        len: usize,
    },
}
