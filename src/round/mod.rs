//! Single-round engine.
//!
//! A round deals two cards each to the player and the dealer, settles
//! naturals immediately, then plays every player hand left to right before
//! the dealer draws. Splits insert a sibling hand right after the split hand,
//! so a plain index walk over the growing hand list visits every hand once.

use alloc::vec::Vec;

use crate::card::Card;
use crate::count::count;
use crate::error::{EmptyShoeError, RoundError};
use crate::event::{Event, EventSink};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{HandOutcome, HandResult, RoundOutcome, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod family;
pub mod state;

use family::HandFamily;
use state::Seat;
pub use state::HandStatus;

/// One round in progress.
///
/// Created by [`Round::deal`], which takes the initial four cards from the
/// shoe, and consumed by [`Round::play`].
pub struct Round<'a> {
    options: &'a GameOptions,
    shoe: &'a mut Shoe,
    sink: &'a dyn EventSink,
    seats: Vec<Seat>,
    families: Vec<HandFamily>,
    dealer: Hand,
    upcard: Card,
    /// Money still available for doubles and splits.
    reserve: usize,
}

impl<'a> Round<'a> {
    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// `reserve` is the bankroll left after placing `bet`; doubles and splits
    /// draw on it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe cannot supply four cards.
    pub fn deal(
        options: &'a GameOptions,
        shoe: &'a mut Shoe,
        sink: &'a dyn EventSink,
        bet: usize,
        reserve: usize,
    ) -> Result<Self, EmptyShoeError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.add_card(shoe.draw()?);
            dealer.add_card(shoe.draw()?);
        }
        let (first, second, upcard) = match (player.cards(), dealer.cards()) {
            ([first, second], [upcard, _]) => (*first, *second, *upcard),
            _ => return Err(EmptyShoeError),
        };
        sink.emit(&Event::Dealt {
            player: [first, second],
            dealer_upcard: upcard,
        });

        let mut seat = Seat::new(bet, 0);
        seat.hand = player;
        Ok(Self {
            options,
            shoe,
            sink,
            seats: alloc::vec![seat],
            families: alloc::vec![HandFamily::new(0, bet)],
            dealer,
            upcard,
            reserve,
        })
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub const fn dealer_upcard(&self) -> Card {
        self.upcard
    }

    /// Plays the round to completion and settles every hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the shoe runs dry or the player's strategy
    /// fails a lookup. Illegal or unreadable choices never abort a round.
    pub fn play<P: Player + ?Sized>(mut self, player: &mut P) -> Result<RoundResult, RoundError> {
        if let Some(result) = self.settle_natural() {
            return Ok(result);
        }

        let mut index = 0;
        while index < self.seats.len() {
            self.play_hand(index, player)?;
            index += 1;
        }

        self.dealer_turn()?;
        Ok(self.settle())
    }

    /// Ends the round on the initial deal if either side has blackjack.
    fn settle_natural(&self) -> Option<RoundResult> {
        let seat = self.seats.first()?;
        let outcome = match (seat.hand.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => HandOutcome::Push,
            (true, false) => HandOutcome::Blackjack,
            (false, true) => HandOutcome::Lose,
            (false, false) => return None,
        };
        if let [first, second] = self.dealer.cards() {
            self.sink.emit(&Event::Natural {
                outcome,
                dealer: [*first, *second],
            });
        }
        let hand = self.hand_result(0, outcome);
        Some(self.finish(alloc::vec![hand]))
    }

    fn hand_result(&self, index: usize, outcome: HandOutcome) -> HandResult {
        let seat = &self.seats[index];
        HandResult {
            hand_index: index,
            outcome,
            bet: seat.bet,
            net: self.net(outcome, seat.bet),
            cards: seat.hand.cards().to_vec(),
            player_value: seat.hand.total(),
            dealer_value: self.dealer.total(),
            busted: seat.hand.is_busted(),
        }
    }

    /// Profit or loss of a settled hand, in bet units.
    fn net(&self, outcome: HandOutcome, bet: usize) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let stake = bet as f64;
        match outcome {
            HandOutcome::Win => stake,
            HandOutcome::Lose => -stake,
            HandOutcome::Push => 0.0,
            HandOutcome::Blackjack => {
                let payout = stake * self.options.blackjack_pays;
                self.options
                    .rounding_blackjack
                    .map_or(payout, |mode| whole(mode.apply(payout)))
            }
            HandOutcome::Surrendered => {
                let forfeit = stake * 0.5;
                -self.options.rounding_surrender.map_or(forfeit, |mode| {
                    whole(mode.apply(forfeit).max(1).min(bet))
                })
            }
        }
    }

    /// Builds the round result and reports every settlement.
    fn finish(&self, hands: Vec<HandResult>) -> RoundResult {
        let played: Vec<&Hand> = self.seats.iter().map(|seat| &seat.hand).collect();
        let delta = count(&(played, &self.dealer));
        let splits: u8 = self.families.iter().map(|family| family.splits).sum();

        for hand in &hands {
            self.sink.emit(&Event::HandSettled {
                hand_index: hand.hand_index,
                outcome: hand.outcome,
                net: hand.net,
            });
        }
        let net: f64 = hands.iter().map(|hand| hand.net).sum();
        self.sink.emit(&Event::RoundSettled { net, count: delta });
        tracing::debug!(net, count = delta, splits, hands = hands.len(), "round settled");

        let outcome = match <[HandResult; 1]>::try_from(hands) {
            Ok([hand]) if splits == 0 => RoundOutcome::Single(hand),
            Ok(single) => RoundOutcome::Split(single.into()),
            Err(hands) => RoundOutcome::Split(hands),
        };
        RoundResult {
            outcome,
            dealer_cards: self.dealer.cards().to_vec(),
            dealer_value: self.dealer.total(),
            dealer_bust: self.dealer.is_busted(),
            dealer_blackjack: self.dealer.is_blackjack(),
            splits,
            count: delta,
        }
    }
}

/// Deals and plays one round.
///
/// # Errors
///
/// Returns [`RoundError`] if the shoe runs dry or a strategy lookup fails.
///
/// # Example
///
/// ```
/// use bjcount::{GameOptions, NullSink, Shoe, StrategyPlayer, StrategyTable, play_round};
///
/// let options = GameOptions::default();
/// let mut shoe = Shoe::shuffled(options.decks, 7).unwrap();
/// let mut player = StrategyPlayer::new(StrategyTable::basic());
/// let result = play_round(&options, &mut shoe, &NullSink, 10, 990, &mut player).unwrap();
/// assert!(!result.hands().is_empty());
/// ```
pub fn play_round<P: Player + ?Sized>(
    options: &GameOptions,
    shoe: &mut Shoe,
    sink: &dyn EventSink,
    bet: usize,
    reserve: usize,
    player: &mut P,
) -> Result<RoundResult, RoundError> {
    Round::deal(options, shoe, sink, bet, reserve)?.play(player)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for monetary values"
)]
fn whole(amount: usize) -> f64 {
    amount as f64
}
