//! Hi-Lo card counting.
//!
//! Counting is stateless: [`count`] returns the delta for exactly the cards it
//! is given, and callers accumulate the running count themselves.
//!
//! ```
//! use bjcount::{Card, Hand, Suit, count, true_count};
//!
//! let hand = Hand::from_cards(&[Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 13)]);
//! let upcard = Card::new(Suit::Spades, 2);
//! assert_eq!(count(&(&hand, upcard)), 1);
//! assert_eq!(true_count(4, 104), 2.0);
//! ```

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::hand::Hand;

/// Anything whose visible cards can be counted.
///
/// Implemented for cards, hands, and slices, vectors, arrays, tuples and
/// references of countable things, so nested mixtures count in one call.
pub trait Counted {
    /// Returns the Hi-Lo delta of every card contained in `self`.
    fn hi_lo(&self) -> i32;
}

/// Hi-Lo tag of a single card: 2-6 are +1, tens and aces are -1, 7-9 are 0.
#[must_use]
pub const fn hi_lo_value(card: &Card) -> i32 {
    match card.rank {
        2..=6 => 1,
        7..=9 => 0,
        _ => -1,
    }
}

impl Counted for Card {
    fn hi_lo(&self) -> i32 {
        hi_lo_value(self)
    }
}

impl Counted for Hand {
    fn hi_lo(&self) -> i32 {
        self.cards().hi_lo()
    }
}

impl<T: Counted> Counted for [T] {
    fn hi_lo(&self) -> i32 {
        self.iter().map(Counted::hi_lo).sum()
    }
}

impl<T: Counted, const N: usize> Counted for [T; N] {
    fn hi_lo(&self) -> i32 {
        self.as_slice().hi_lo()
    }
}

impl<T: Counted> Counted for Vec<T> {
    fn hi_lo(&self) -> i32 {
        self.as_slice().hi_lo()
    }
}

impl<T: Counted + ?Sized> Counted for &T {
    fn hi_lo(&self) -> i32 {
        (**self).hi_lo()
    }
}

impl<A: Counted, B: Counted> Counted for (A, B) {
    fn hi_lo(&self) -> i32 {
        self.0.hi_lo() + self.1.hi_lo()
    }
}

/// Returns the Hi-Lo delta for exactly the cards in `items`.
#[must_use]
pub fn count<C: Counted + ?Sized>(items: &C) -> i32 {
    items.hi_lo()
}

/// Normalizes a running count by the number of decks left in the shoe.
///
/// Returns 0 when the shoe is empty.
#[must_use]
pub fn true_count(running_count: i32, cards_remaining: usize) -> f64 {
    if cards_remaining == 0 {
        return 0.0;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let decks_remaining = cards_remaining as f64 / DECK_SIZE as f64;
    f64::from(running_count) / decks_remaining
}
