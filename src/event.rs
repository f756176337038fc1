//! Engine events and sinks.
//!
//! Rounds and sessions report what happens through one [`EventSink`].
//! Transports render events for a human or a script; batch runs pass
//! [`NullSink`].

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::HandOutcome;
use crate::session::AuditRecord;
use crate::strategy::{Action, LegalActions};
use crate::sync::Mutex;

/// Something observable that happened during play.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A round started with the given bet.
    RoundStarted {
        /// The bet on the initial hand.
        bet: usize,
        /// True count before the deal.
        true_count: f64,
    },
    /// The initial cards were dealt.
    Dealt {
        /// The player's two cards.
        player: [Card; 2],
        /// The dealer's face-up card.
        dealer_upcard: Card,
    },
    /// The round ended on the initial deal.
    Natural {
        /// Outcome for the player.
        outcome: HandOutcome,
        /// Both dealer cards.
        dealer: [Card; 2],
    },
    /// A hand is waiting for a decision.
    HandState {
        /// Hand position.
        hand_index: usize,
        /// Current cards.
        cards: Vec<Card>,
        /// Current total.
        total: u8,
        /// Whether the total is soft.
        soft: bool,
        /// Bet on the hand.
        bet: usize,
        /// Legal optional actions.
        legal: LegalActions,
    },
    /// An action was applied to a hand.
    ActionTaken {
        /// Hand position.
        hand_index: usize,
        /// The action.
        action: Action,
    },
    /// The player asked for an action the hand cannot take.
    IllegalAction {
        /// Hand position.
        hand_index: usize,
        /// The refused action.
        action: Action,
        /// Why it was refused.
        reason: ActionError,
    },
    /// The player's input did not name an action.
    InvalidInput {
        /// Hand position.
        hand_index: usize,
    },
    /// The player went away; the hand stands.
    Disconnected {
        /// Hand position.
        hand_index: usize,
    },
    /// A hand was split.
    Split {
        /// Position of the split hand; its sibling sits right after it.
        hand_index: usize,
        /// Splits performed by the hand's family so far.
        splits: u8,
    },
    /// A hand went over 21.
    Busted {
        /// Hand position.
        hand_index: usize,
        /// The busting total.
        total: u8,
    },
    /// The dealer finished drawing.
    DealerPlayed {
        /// The dealer's final cards.
        cards: Vec<Card>,
        /// The dealer's final total.
        total: u8,
    },
    /// A hand was settled.
    HandSettled {
        /// Hand position.
        hand_index: usize,
        /// Outcome.
        outcome: HandOutcome,
        /// Profit or loss.
        net: f64,
    },
    /// The round was settled.
    RoundSettled {
        /// Net profit over all hands.
        net: f64,
        /// Hi-Lo delta of the round.
        count: i32,
    },
    /// The session skipped a round because the count was too low, and
    /// reshuffled.
    SatOut {
        /// True count that triggered the exit.
        true_count: f64,
    },
    /// The shoe was replaced.
    Reshuffled {
        /// Profit made on the shoe being discarded.
        shoe_profit: f64,
    },
    /// The bankroll ran out.
    Bankrupt,
    /// Per-round audit line.
    Audit(AuditRecord),
}

/// Receives engine events.
pub trait EventSink: Send + Sync {
    /// Handles one event.
    fn emit(&self, event: &Event);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &Event) {}
}

/// Keeps every event in memory.
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.events.lock())
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &Event) {
        self.events.lock().push(event.clone());
    }
}

/// Forwards every event to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &Event) {
        tracing::trace!(?event, "blackjack event");
    }
}
