//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// An ordered set of cards held by the player or the dealer.
///
/// Every derived attribute is recomputed from the cards on each call. A hand
/// knows nothing about bets or split lineage; the round engine tracks those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which for the dealer is the upcard.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the total of the hand.
    ///
    /// Aces start at 11 and are demoted to 1 one at a time, only while the
    /// total would otherwise bust.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the cards form an ace plus a ten-valued card.
    ///
    /// The hand cannot tell whether it came from a split; callers must not
    /// treat a post-split 21 as a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => (a.is_ace() && b.is_ten_valued()) || (b.is_ace() && a.is_ten_valued()),
            _ => false,
        }
    }

    /// Returns whether the hand is exactly two cards of identical rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
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

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.can_split() {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// Returns whether the dealer must draw another card.
///
/// The dealer draws below 17. A soft 17 stands when `stand_on_soft_17` is set
/// and draws otherwise.
#[must_use]
pub fn dealer_should_hit(hand: &Hand, stand_on_soft_17: bool) -> bool {
    let (total, soft) = evaluate_cards(hand.cards());
    total < 17 || (total == 17 && soft && !stand_on_soft_17)
}
