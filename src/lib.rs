//! A card-counting blackjack round engine with optional `no_std` support.
//!
//! The crate deals rounds from a seeded multi-deck [`Shoe`], asks a
//! [`Player`] for every decision, plays split hand families left to right,
//! and settles each hand against the dealer. A [`Session`] carries bankroll,
//! Hi-Lo running count and shoe across rounds, sizing bets with a
//! [`BetRamp`] and choosing tables from a [`StrategyLadder`].
//!
//! # Example
//!
//! ```
//! use bjcount::{GameOptions, NullSink, Session, SessionOptions, StrategyLadder};
//!
//! let ladder = StrategyLadder::illustrious();
//! let mut session = Session::new(
//!     GameOptions::default(),
//!     SessionOptions::default().with_base_bet(5),
//!     &ladder,
//!     &NullSink,
//!     42,
//! )
//! .unwrap();
//! let tally = session.run(100).unwrap();
//! assert_eq!(tally.wins + tally.losses + tally.pushes, tally.rounds);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod betting;
pub mod card;
pub mod count;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;
pub mod strategy;
mod sync;

// Re-export main types
pub use betting::BetRamp;
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use count::{Counted, count, hi_lo_value, true_count};
pub use error::{
    ActionError, ConfigError, EmptyShoeError, LookupError, ParseActionError, RoundError,
    SessionError,
};
pub use event::{Event, EventSink, NullSink, RecordingSink, TracingSink};
pub use hand::{Hand, dealer_should_hit};
pub use options::{GameOptions, RoundingMode};
pub use player::{Choice, FnPlayer, Player, Prompt, StrategyPlayer};
pub use result::{HandOutcome, HandResult, RoundOutcome, RoundResult};
pub use round::{HandStatus, Round, play_round};
#[cfg(feature = "std")]
pub use session::AuditLog;
#[cfg(feature = "parallel")]
pub use session::simulate_parallel;
pub use session::{
    AuditRecord, BatchSummary, RoundReport, Session, SessionOptions, Tally, simulate,
};
pub use shoe::Shoe;
pub use strategy::{
    Action, Cell, DEFAULT_THRESHOLDS, INDEX_PLAYS, IndexPlay, LegalActions, Matrix, PlayCell,
    StrategyLadder, StrategyProvider, StrategyTable,
};
