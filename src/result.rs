//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher total).
    Win,
    /// Player loses (player busts or dealer has higher total).
    Lose,
    /// Push (tie).
    Push,
    /// Player has a natural blackjack and the dealer does not.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

/// Settlement record for one hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// Position of the hand among the round's hands (left to right).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet on this hand, doubled if the hand doubled.
    pub bet: usize,
    /// Profit (positive) or loss (negative) on this hand, in bet units.
    ///
    /// Fractional when a natural pays 3:2 on an odd bet or a surrender
    /// forfeits half of one.
    pub net: f64,
    /// The cards the hand ended with.
    pub cards: Vec<Card>,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the hand busted.
    pub busted: bool,
}

/// The hands a round settled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// No split happened.
    Single(HandResult),
    /// One or more splits happened; hands in table order.
    Split(Vec<HandResult>),
}

impl RoundOutcome {
    /// Returns every settled hand in table order.
    #[must_use]
    pub fn hands(&self) -> &[HandResult] {
        match self {
            Self::Single(hand) => core::slice::from_ref(hand),
            Self::Split(hands) => hands,
        }
    }
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Per-hand settlements.
    pub outcome: RoundOutcome,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Number of splits performed.
    pub splits: u8,
    /// Hi-Lo delta over every player and dealer card of the round.
    pub count: i32,
}

impl RoundResult {
    /// Returns every settled hand in table order.
    #[must_use]
    pub fn hands(&self) -> &[HandResult] {
        self.outcome.hands()
    }

    /// Net profit of the round, summed across all hands.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.hands().iter().map(|hand| hand.net).sum()
    }

    /// Total amount wagered, doubles and splits included.
    #[must_use]
    pub fn wagered(&self) -> usize {
        self.hands().iter().map(|hand| hand.bet).sum()
    }
}
