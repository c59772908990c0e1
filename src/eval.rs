//! Poker hand evaluation.
//!
//! Categories are tested in strictly descending rank order and the first
//! match wins, so every hand lands in exactly one category.

use core::fmt;

use crate::card::{Card, Rank};
use crate::hand::{HAND_SIZE, Hand};

/// Poker hand category, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Ace, King, Queen, Jack, and Ten of one suit.
    RoyalFlush,
    /// Five consecutive cards of one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three cards of one rank plus a pair of another.
    FullHouse,
    /// Five cards of one suit.
    Flush,
    /// Five consecutive cards.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two pairs of different ranks.
    TwoPair,
    /// Two cards of one rank.
    Pair,
    /// No other category matched; holds the rank of the highest card, with
    /// Ace counted high.
    HighCard(Rank),
}

impl HandCategory {
    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::Pair => "Pair",
            Self::HighCard(_) => "High Card",
        }
    }

    /// Returns whether this is the high-card fallback category.
    #[must_use]
    pub const fn is_high_card(self) -> bool {
        matches!(self, Self::HighCard(_))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-rank occurrence counts for one hand, indexed by rank value.
///
/// Rebuilt for every evaluation and discarded afterwards.
struct RankCounts([u8; Rank::ALL.len()]);

impl RankCounts {
    fn new(hand: &Hand) -> Self {
        let mut counts = [0u8; Rank::ALL.len()];
        for card in hand.cards() {
            counts[usize::from(card.value()) - 1] += 1;
        }
        Self(counts)
    }

    /// Returns whether some rank occurs exactly `count` times.
    fn contains(&self, count: u8) -> bool {
        self.0.iter().any(|&c| c == count)
    }

    /// Returns whether some rank occurs at least `count` times.
    fn contains_at_least(&self, count: u8) -> bool {
        self.0.iter().any(|&c| c >= count)
    }

    /// Returns the number of ranks occurring exactly twice.
    fn pairs(&self) -> usize {
        self.0.iter().filter(|&&c| c == 2).count()
    }
}

/// Classifies a five-card hand into its poker category.
///
/// Evaluation is pure: the same hand always yields the same category, and
/// the input is never mutated.
///
/// # Example
///
/// ```
/// use pkrs::{Card, HandCategory, Hand, Rank, Suit, rank_hand};
///
/// let hand = Hand::new([
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
///     Card::new(Suit::Hearts, Rank::Queen),
///     Card::new(Suit::Hearts, Rank::Jack),
///     Card::new(Suit::Hearts, Rank::Ten),
/// ]);
/// assert_eq!(rank_hand(&hand), HandCategory::RoyalFlush);
/// ```
#[must_use]
pub fn rank_hand(hand: &Hand) -> HandCategory {
    let counts = RankCounts::new(hand);

    if is_royal_flush(hand) {
        return HandCategory::RoyalFlush;
    }
    if is_flush(hand) && is_straight(hand) {
        return HandCategory::StraightFlush;
    }
    if counts.contains_at_least(4) {
        return HandCategory::FourOfAKind;
    }
    if counts.contains(3) && counts.contains(2) {
        return HandCategory::FullHouse;
    }
    if is_flush(hand) {
        return HandCategory::Flush;
    }
    if is_straight(hand) {
        return HandCategory::Straight;
    }
    if counts.contains(3) {
        return HandCategory::ThreeOfAKind;
    }
    if counts.pairs() == 2 {
        return HandCategory::TwoPair;
    }
    if counts.contains(2) {
        return HandCategory::Pair;
    }
    HandCategory::HighCard(high_card(hand))
}

/// Ace, King, Queen, Jack, and Ten all present, all in the Ace's suit.
fn is_royal_flush(hand: &Hand) -> bool {
    let Some(ace) = hand.cards().iter().find(|c| c.rank == Rank::Ace) else {
        return false;
    };
    let suit = ace.suit;

    [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
        .into_iter()
        .all(|rank| {
            hand.cards()
                .iter()
                .any(|c| c.rank == rank && c.suit == suit)
        })
}

/// All five cards share one suit.
fn is_flush(hand: &Hand) -> bool {
    let suit = hand.cards()[0].suit;
    hand.cards().iter().all(|c| c.suit == suit)
}

/// Five consecutive values after an ascending sort.
///
/// A King directly followed by an Ace also counts as consecutive (Ace as
/// 14). Aces sort first, so an offsuit ten-to-ace run fails this check and
/// falls through to the high-card Ace, while Ace-2-3-4-5 passes as an
/// ordinary run.
fn is_straight(hand: &Hand) -> bool {
    let cards = sorted_by_value(hand);

    cards.windows(2).all(|pair| {
        pair[0].value() + 1 == pair[1].value()
            || (pair[0].rank == Rank::King && pair[1].rank == Rank::Ace)
    })
}

fn sorted_by_value(hand: &Hand) -> [Card; HAND_SIZE] {
    let mut cards = *hand.cards();
    cards.sort_unstable_by_key(|c| c.value());
    cards
}

/// Rank of the highest card, counting Ace above King.
fn high_card(hand: &Hand) -> Rank {
    let cards = hand.cards();

    if cards.iter().any(|c| c.rank == Rank::Ace) {
        return Rank::Ace;
    }

    let mut best = cards[0];
    for &card in &cards[1..] {
        if card.value() > best.value() {
            best = card;
        }
    }
    best.rank
}
