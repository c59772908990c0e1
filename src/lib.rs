//! A five-card poker hand evaluator and deck engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Deck`] of 52 cards with shuffling and destructive
//! draws, a five-card [`Hand`], and [`rank_hand`] which classifies a hand
//! into one of the ten standard poker categories, highest first. A [`Dealer`]
//! wraps the common "deal me something random" entry points behind a seeded
//! RNG.
//!
//! # Example
//!
//! ```
//! use pkrs::Dealer;
//!
//! let mut dealer = Dealer::new(42);
//! let deal = dealer.deal_hand()?;
//! if let pkrs::HandCategory::HighCard(rank) = deal.category {
//!     println!("High Card of {rank}");
//! } else {
//!     println!("{}", deal.category);
//! }
//! # Ok::<(), pkrs::DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{Deal, Dealer};
pub use deck::Deck;
pub use error::{DeckError, HandError};
pub use eval::{HandCategory, rank_hand};
pub use hand::{HAND_SIZE, Hand};
