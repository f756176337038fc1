//! Error types for engine operations.

use thiserror::Error;

use crate::strategy::Matrix;

/// Invalid configuration, rejected before any simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("number of decks must be at least 1")]
    ZeroDecks,
    /// A batch must play at least one round.
    #[error("number of rounds must be at least 1")]
    ZeroRounds,
    /// Penetration must lie in `0.0..1.0`.
    #[error("penetration must be at least 0 and below 1")]
    InvalidPenetration,
    /// Blackjack payout ratio must be finite and non-negative.
    #[error("blackjack payout must be finite and non-negative")]
    InvalidPayout,
    /// The bet ramp must bet on a fresh shoe, or sitting out never ends.
    #[error("bet ramp sits out at a true count of 0")]
    RampNeverBets,
}

/// The shoe ran out of cards mid-round.
///
/// The session reshuffles well before this can happen, so seeing it means the
/// penetration check upstream is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// A strategy matrix was consulted outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {matrix} cell for hand {total} against dealer {upcard}")]
pub struct LookupError {
    /// The matrix that was consulted.
    pub matrix: Matrix,
    /// The hand total (or pair card value) used as the row.
    pub total: u8,
    /// The dealer upcard value used as the column.
    pub upcard: u8,
}

/// Reasons an action is not legal in the current hand state.
///
/// These are never returned from a round: the engine reports them through
/// [`Event::IllegalAction`](crate::Event::IllegalAction) and asks again or
/// falls back to standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
    /// The strategy was consulted with an impossible hand.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors that stop a session or batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// A round failed.
    #[error("round failed: {0}")]
    Round(#[from] RoundError),
}

impl From<EmptyShoeError> for SessionError {
    fn from(err: EmptyShoeError) -> Self {
        Self::Round(err.into())
    }
}

/// Console input that does not name an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action")]
pub struct ParseActionError;
