//! Per-hand state.

use crate::card::Card;
use crate::hand::Hand;

/// Where a player hand stands within a round.
///
/// `AwaitingAction` moves to `Done` on stand or double, to `Busted` the moment
/// the total passes 21, and to `Surrendered` on a first-decision surrender.
/// A split keeps the hand awaiting action and adds an awaiting sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    AwaitingAction,
    /// Hand has busted (over 21).
    Busted,
    /// Hand has finished acting without busting.
    Done,
    /// Player has surrendered.
    Surrendered,
}

/// A player hand seated at the table, with its bet and lineage.
#[derive(Debug, Clone)]
pub(crate) struct Seat {
    pub(crate) hand: Hand,
    pub(crate) bet: usize,
    pub(crate) status: HandStatus,
    pub(crate) family: usize,
    pub(crate) from_split: bool,
}

impl Seat {
    pub(crate) const fn new(bet: usize, family: usize) -> Self {
        Self {
            hand: Hand::new(),
            bet,
            status: HandStatus::AwaitingAction,
            family,
            from_split: false,
        }
    }

    pub(crate) fn split_from(card: Card, bet: usize, family: usize) -> Self {
        Self {
            hand: Hand::from_cards(&[card]),
            bet,
            status: HandStatus::AwaitingAction,
            family,
            from_split: true,
        }
    }
}
