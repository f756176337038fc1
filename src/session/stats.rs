//! Batch statistics.

use core::fmt;

use crate::result::HandOutcome;

use super::RoundReport;

/// Running totals over a stretch of session play.
///
/// Tallies from independent sessions merge by addition.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Rounds actually dealt.
    pub rounds: usize,
    /// Rounds with positive net.
    pub wins: usize,
    /// Rounds with negative net.
    pub losses: usize,
    /// Rounds with zero net.
    pub pushes: usize,
    /// Player hands that busted.
    pub player_busts: usize,
    /// Rounds in which the dealer busted.
    pub dealer_busts: usize,
    /// Natural blackjacks paid.
    pub player_blackjacks: usize,
    /// Iterations skipped because the count was too low.
    pub rounds_skipped: usize,
    /// Money put at risk, doubles and splits included.
    pub total_wagered: usize,
    /// Sum of every round's net.
    pub net_profit: f64,
    /// Bankroll left at the end, summed over merged sessions.
    pub final_bankroll: f64,
}

impl Tally {
    /// Adds one session iteration.
    pub fn record(&mut self, report: &RoundReport) {
        match report {
            RoundReport::Played { round, .. } => {
                self.rounds += 1;
                match round.net() {
                    net if net > 0.0 => self.wins += 1,
                    net if net < 0.0 => self.losses += 1,
                    _ => self.pushes += 1,
                }
                self.player_busts += round.hands().iter().filter(|hand| hand.busted).count();
                self.player_blackjacks += round
                    .hands()
                    .iter()
                    .filter(|hand| hand.outcome == HandOutcome::Blackjack)
                    .count();
                self.dealer_busts += usize::from(round.dealer_bust);
                self.total_wagered += round.wagered();
                self.net_profit += round.net();
            }
            RoundReport::SatOut { .. } => self.rounds_skipped += 1,
            RoundReport::Bankrupt => {}
        }
    }

    /// Folds another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.rounds += other.rounds;
        self.wins += other.wins;
        self.losses += other.losses;
        self.pushes += other.pushes;
        self.player_busts += other.player_busts;
        self.dealer_busts += other.dealer_busts;
        self.player_blackjacks += other.player_blackjacks;
        self.rounds_skipped += other.rounds_skipped;
        self.total_wagered += other.total_wagered;
        self.net_profit += other.net_profit;
        self.final_bankroll += other.final_bankroll;
    }

    /// Derives the reporting record.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for hand counts and money"
    )]
    pub fn summary(&self) -> BatchSummary {
        let win_rate = if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64 * 100.0
        };
        let house_edge = if self.total_wagered == 0 {
            0.0
        } else {
            -self.net_profit / self.total_wagered as f64 * 100.0
        };
        BatchSummary {
            total_hands: self.rounds,
            wins: self.wins,
            losses: self.losses,
            pushes: self.pushes,
            win_rate,
            house_edge,
            player_busts: self.player_busts,
            dealer_busts: self.dealer_busts,
            player_blackjacks: self.player_blackjacks,
            rounds_skipped: self.rounds_skipped,
            total_wagered: self.total_wagered,
            net_profit: self.net_profit,
            final_bankroll: self.final_bankroll,
        }
    }
}

/// Aggregate result of a batch run.
///
/// `wins + losses + pushes == total_hands` always holds; skipped rounds are
/// counted apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Rounds dealt.
    pub total_hands: usize,
    /// Rounds won.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
    /// Percentage of rounds won, in `0.0..=100.0`.
    pub win_rate: f64,
    /// Player loss as a percentage of money wagered.
    pub house_edge: f64,
    /// Player hands that busted.
    pub player_busts: usize,
    /// Rounds the dealer busted.
    pub dealer_busts: usize,
    /// Natural blackjacks.
    pub player_blackjacks: usize,
    /// Iterations skipped on a low count.
    pub rounds_skipped: usize,
    /// Money wagered.
    pub total_wagered: usize,
    /// Net result for the player.
    pub net_profit: f64,
    /// Bankroll at the end.
    pub final_bankroll: f64,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands:       {}", self.total_hands)?;
        writeln!(f, "Wins:              {}", self.wins)?;
        writeln!(f, "Losses:            {}", self.losses)?;
        writeln!(f, "Pushes:            {}", self.pushes)?;
        writeln!(f, "Win rate:          {:.2}%", self.win_rate)?;
        writeln!(f, "House edge:        {:.2}%", self.house_edge)?;
        writeln!(f, "Player busts:      {}", self.player_busts)?;
        writeln!(f, "Dealer busts:      {}", self.dealer_busts)?;
        writeln!(f, "Player blackjacks: {}", self.player_blackjacks)?;
        writeln!(f, "Rounds skipped:    {}", self.rounds_skipped)?;
        writeln!(f, "Total wagered:     {}", self.total_wagered)?;
        writeln!(f, "Net profit:        {}", self.net_profit)?;
        write!(f, "Final bankroll:    {}", self.final_bankroll)
    }
}
