//! Strategy oracle: actions, strategy tables, and true-count table ladders.
//!
//! The round engine only talks to a [`StrategyProvider`]. [`StrategyTable`]
//! is the table-backed provider; [`StrategyLadder`] picks which table applies
//! at a given true count.

use core::fmt;
use core::str::FromStr;

use crate::error::{LookupError, ParseActionError};
use crate::hand::Hand;

mod ladder;
mod table;

pub use ladder::{DEFAULT_THRESHOLDS, INDEX_PLAYS, IndexPlay, PlayCell, StrategyLadder};
pub use table::{Cell, StrategyTable};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Take no more cards.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet before taking any other action.
    Surrender,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
            Self::Surrender => "surrender",
        })
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "h" | "H" | "hit" => Ok(Self::Hit),
            "s" | "S" | "stand" => Ok(Self::Stand),
            "d" | "D" | "double" => Ok(Self::Double),
            "v" | "V" | "p" | "P" | "split" => Ok(Self::Split),
            "u" | "U" | "r" | "R" | "surrender" => Ok(Self::Surrender),
            _ => Err(ParseActionError),
        }
    }
}

/// Which optional actions are legal for the hand being decided.
///
/// Hit and stand are always legal while a hand awaits action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalActions {
    /// Doubling is allowed (two cards, rules and bankroll permit it).
    pub double: bool,
    /// Splitting is allowed (pair, split budget and bankroll permit it).
    pub split: bool,
    /// Surrender is allowed (first decision of the un-split original hand).
    pub surrender: bool,
}

impl LegalActions {
    /// Returns whether `action` is legal.
    #[must_use]
    pub const fn permits(&self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => true,
            Action::Double => self.double,
            Action::Split => self.split,
            Action::Surrender => self.surrender,
        }
    }
}

/// The matrices of a strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Matrix {
    /// Hard totals 4-21.
    Hard,
    /// Soft totals 12-21.
    Soft,
    /// Pairs by card value 2-11.
    Pair,
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::Pair => "pair",
        })
    }
}

/// A source of strategy decisions.
///
/// Implementations are keyed to one pre-selected table; selecting the table
/// for a true count and loading table contents happen elsewhere.
pub trait StrategyProvider {
    /// Returns the action for `hand` against the dealer upcard value
    /// (2-11, ace as 11), never returning an action `legal` forbids.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the hand total or upcard falls outside the
    /// provider's domain.
    fn action(&self, hand: &Hand, dealer_upcard: u8, legal: LegalActions)
    -> Result<Action, LookupError>;
}

impl<S: StrategyProvider + ?Sized> StrategyProvider for &S {
    fn action(
        &self,
        hand: &Hand,
        dealer_upcard: u8,
        legal: LegalActions,
    ) -> Result<Action, LookupError> {
        (**self).action(hand, dealer_upcard, legal)
    }
}
