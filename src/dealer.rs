//! Dealing entry points for interactive consumers.
//!
//! A [`Dealer`] is the boundary a chat command or UI calls into: it builds a
//! fresh shuffled deck per request, so successive deals are independent.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::eval::{HandCategory, rank_hand};
use crate::hand::Hand;

/// A dealt and evaluated five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    /// The cards in deal order.
    pub hand: Hand,
    /// The evaluated category; [`HandCategory::is_high_card`] tells callers
    /// to render "High Card of X" instead of the plain name.
    pub category: HandCategory,
}

/// Deals random cards and poker hands from fresh decks.
///
/// The dealer owns a seeded RNG, so a given seed reproduces the same
/// sequence of draws and deals.
///
/// # Example
///
/// ```
/// use pkrs::Dealer;
///
/// let mut dealer = Dealer::new(42);
/// let deal = dealer.deal_hand()?;
/// println!("{}", deal.category);
/// # Ok::<(), pkrs::DeckError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a fresh shuffled deck and draws a single card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the draw fails; a fresh deck always
    /// has 52 cards, so this does not happen in practice.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        deck.draw()
    }

    /// Builds a fresh shuffled deck, draws five cards, and evaluates them.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if a draw fails; a fresh deck always has
    /// 52 cards, so this does not happen in practice.
    pub fn deal_hand(&mut self) -> Result<Deal, DeckError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);

        let cards = [
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
        ];

        let hand = Hand::new(cards);
        let category = rank_hand(&hand);

        Ok(Deal { hand, category })
    }
}
