use alloc::vec::Vec;

use crate::error::EmptyShoeError;
use crate::event::Event;
use crate::hand::dealer_should_hit;
use crate::result::{HandOutcome, RoundResult};

use super::Round;
use super::state::HandStatus;

impl Round<'_> {
    /// Checks if any hand is still standing against the dealer.
    fn any_live_hands(&self) -> bool {
        self.seats
            .iter()
            .any(|seat| seat.status == HandStatus::Done)
    }

    /// Draws dealer cards by house rule.
    ///
    /// The dealer stays on two cards when every hand has busted or
    /// surrendered.
    pub(super) fn dealer_turn(&mut self) -> Result<(), EmptyShoeError> {
        if self.any_live_hands() {
            while dealer_should_hit(&self.dealer, self.options.stand_on_soft_17) {
                let card = self.shoe.draw()?;
                self.dealer.add_card(card);
            }
        }
        self.sink.emit(&Event::DealerPlayed {
            cards: self.dealer.cards().to_vec(),
            total: self.dealer.total(),
        });
        Ok(())
    }

    /// Compares every hand against the dealer.
    ///
    /// A two-card 21 made after a split is an ordinary 21 and wins at even
    /// money.
    pub(super) fn settle(&self) -> RoundResult {
        let dealer_total = self.dealer.total();
        let dealer_bust = self.dealer.is_busted();

        let hands: Vec<_> = self
            .seats
            .iter()
            .enumerate()
            .map(|(index, seat)| {
                let outcome = match seat.status {
                    HandStatus::Surrendered => HandOutcome::Surrendered,
                    HandStatus::Busted => HandOutcome::Lose,
                    HandStatus::Done | HandStatus::AwaitingAction => {
                        let total = seat.hand.total();
                        if dealer_bust || total > dealer_total {
                            HandOutcome::Win
                        } else if total < dealer_total {
                            HandOutcome::Lose
                        } else {
                            HandOutcome::Push
                        }
                    }
                };
                self.hand_result(index, outcome)
            })
            .collect();

        self.finish(hands)
    }
}
