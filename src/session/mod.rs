//! Session loop: bankroll, running count and shoe across many rounds.

use crate::betting::BetRamp;
use crate::count::true_count;
use crate::error::{ConfigError, SessionError};
use crate::event::{Event, EventSink};
use crate::options::GameOptions;
use crate::player::{Player, StrategyPlayer};
use crate::result::RoundResult;
use crate::round::play_round;
use crate::shoe::Shoe;
use crate::strategy::StrategyLadder;

mod audit;
mod batch;
mod stats;

#[cfg(feature = "std")]
pub use audit::AuditLog;
pub use audit::AuditRecord;
#[cfg(feature = "parallel")]
pub use batch::simulate_parallel;
pub use batch::simulate;
pub use stats::{BatchSummary, Tally};

/// Bankroll and betting configuration for a session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Unit bet the ramp multiplies.
    pub base_bet: usize,
    /// Starting bankroll.
    pub bankroll: usize,
    /// True count to bet multiplier.
    pub bet_ramp: BetRamp,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            base_bet: 1,
            bankroll: 1000,
            bet_ramp: BetRamp::default(),
        }
    }
}

impl SessionOptions {
    /// Sets the unit bet.
    #[must_use]
    pub const fn with_base_bet(mut self, base_bet: usize) -> Self {
        self.base_bet = base_bet;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: usize) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the bet ramp.
    #[must_use]
    pub fn with_bet_ramp(mut self, bet_ramp: BetRamp) -> Self {
        self.bet_ramp = bet_ramp;
        self
    }

    /// Checks that sitting out always leads back to a dealt round.
    ///
    /// A sit-out resets the count to 0, so the ramp must bet there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RampNeverBets`] if the ramp's multiplier at a
    /// true count of 0 is 0 while the base bet is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_bet > 0 && self.bet_ramp.multiplier(0.0) == 0 {
            return Err(ConfigError::RampNeverBets);
        }
        Ok(())
    }
}

/// What one session iteration did.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundReport {
    /// A round was dealt and settled.
    Played {
        /// The settled round.
        round: RoundResult,
        /// Session state after settlement.
        audit: AuditRecord,
        /// Whether the shoe was replaced afterwards.
        reshuffled: bool,
    },
    /// The count was too low to bet; the shoe was replaced instead.
    SatOut {
        /// True count that triggered the exit.
        true_count: f64,
    },
    /// The bankroll is empty; nothing was dealt.
    Bankrupt,
}

/// A player sitting at one shoe over many rounds.
///
/// The session owns its shoe and count state, so independent sessions can run
/// on separate threads.
pub struct Session<'a> {
    options: GameOptions,
    betting: SessionOptions,
    ladder: &'a StrategyLadder,
    sink: &'a dyn EventSink,
    shoe: Shoe,
    bankroll: f64,
    running_count: i32,
    shoe_profit: f64,
    iteration: usize,
}

impl<'a> Session<'a> {
    /// Starts a session on a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the options are invalid.
    pub fn new(
        options: GameOptions,
        betting: SessionOptions,
        ladder: &'a StrategyLadder,
        sink: &'a dyn EventSink,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let shoe = Shoe::shuffled(options.decks, seed)?;
        Self::with_shoe(options, betting, ladder, sink, shoe)
    }

    /// Starts a session on a prepared shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the table or betting options are invalid.
    pub fn with_shoe(
        options: GameOptions,
        betting: SessionOptions,
        ladder: &'a StrategyLadder,
        sink: &'a dyn EventSink,
        shoe: Shoe,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        betting.validate()?;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let bankroll = betting.bankroll as f64;
        Ok(Self {
            options,
            betting,
            ladder,
            sink,
            shoe,
            bankroll,
            running_count: 0,
            shoe_profit: 0.0,
            iteration: 0,
        })
    }

    /// Current bankroll. Fractional after 3:2 payouts on odd bets.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Whole bet units the bankroll can cover.
    fn affordable(&self) -> usize {
        self.bankroll as usize
    }

    /// Running Hi-Lo count since the last reshuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count normalized by decks left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        true_count(self.running_count, self.shoe.remaining())
    }

    /// Net result on the current shoe.
    #[must_use]
    pub const fn shoe_profit(&self) -> f64 {
        self.shoe_profit
    }

    /// The shoe in play.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Plays one iteration with the ladder table for the current true count.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the round aborts.
    pub fn play_next(&mut self) -> Result<RoundReport, SessionError> {
        let ladder = self.ladder;
        let mut player = StrategyPlayer::new(ladder.select_table(self.true_count()));
        self.play_next_with(&mut player)
    }

    /// Plays one iteration, taking decisions from `player`.
    ///
    /// Bets by the ramp, sits out (reshuffling and resetting the count) when
    /// the ramp says 0 with a positive base bet, and reports bankruptcy
    /// without dealing once the bankroll is gone.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the round aborts.
    pub fn play_next_with<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<RoundReport, SessionError> {
        let base_bet = self.betting.base_bet;
        let affordable = self.affordable();
        if affordable == 0 && base_bet > 0 {
            tracing::info!(iteration = self.iteration, "out of money");
            self.sink.emit(&Event::Bankrupt);
            return Ok(RoundReport::Bankrupt);
        }

        let iteration = self.iteration;
        self.iteration += 1;
        let before = self.true_count();
        let bet = self.betting.bet_ramp.bet(base_bet, before, affordable);
        if bet == 0 && base_bet > 0 {
            tracing::info!(true_count = before, "count too low, leaving the table");
            self.sink.emit(&Event::SatOut { true_count: before });
            self.reshuffle();
            return Ok(RoundReport::SatOut { true_count: before });
        }

        self.sink.emit(&Event::RoundStarted {
            bet,
            true_count: before,
        });
        let reserve = affordable - bet;
        let round = play_round(
            &self.options,
            &mut self.shoe,
            self.sink,
            bet,
            reserve,
            player,
        )?;

        let net = round.net();
        self.bankroll = (self.bankroll + net).max(0.0);
        self.shoe_profit += net;
        self.running_count += round.count;

        let audit = AuditRecord {
            hand_index: iteration,
            balance: self.bankroll,
            running_count: self.running_count,
            true_count: self.true_count(),
        };
        self.sink.emit(&Event::Audit(audit));

        let reshuffled = self.shoe.needs_reshuffle(self.options.penetration);
        if reshuffled {
            self.reshuffle();
        }
        Ok(RoundReport::Played {
            round,
            audit,
            reshuffled,
        })
    }

    /// Deals `rounds` rounds, stopping early only on bankruptcy.
    ///
    /// Sit-outs do not count towards `rounds`; they are tallied in
    /// [`Tally::rounds_skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if a round aborts.
    pub fn run(&mut self, rounds: usize) -> Result<Tally, SessionError> {
        let mut tally = Tally::default();
        while tally.rounds < rounds {
            let report = self.play_next()?;
            if matches!(report, RoundReport::Bankrupt) {
                break;
            }
            tally.record(&report);
            if matches!(report, RoundReport::Played { .. }) && tally.rounds % 1000 == 0 {
                tracing::info!(
                    done = tally.rounds,
                    rounds,
                    bankroll = self.bankroll,
                    "progress"
                );
            }
        }
        tally.final_bankroll = self.bankroll;
        Ok(tally)
    }

    /// Replaces the shoe and forgets the count.
    fn reshuffle(&mut self) {
        tracing::info!(shoe_profit = self.shoe_profit, "reshuffling shoe");
        self.sink.emit(&Event::Reshuffled {
            shoe_profit: self.shoe_profit,
        });
        self.shoe.reshuffle();
        self.running_count = 0;
        self.shoe_profit = 0.0;
    }
}
