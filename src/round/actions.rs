use crate::error::{ActionError, RoundError};
use crate::event::Event;
use crate::player::{Choice, Player, Prompt};
use crate::strategy::{Action, LegalActions};

use super::Round;
use super::family;
use super::state::{HandStatus, Seat};

impl Round<'_> {
    /// Checks whether `action` is legal for the hand at `index`.
    pub(super) fn check_action(&self, index: usize, action: Action) -> Result<(), ActionError> {
        let seat = &self.seats[index];
        match action {
            Action::Hit | Action::Stand => Ok(()),
            Action::Double => {
                if seat.hand.len() != 2 || (seat.from_split && !self.options.double_after_split) {
                    Err(ActionError::CannotDouble)
                } else if self.reserve < seat.bet {
                    Err(ActionError::InsufficientFunds)
                } else {
                    Ok(())
                }
            }
            Action::Split => {
                let family = &self.families[seat.family];
                if !seat.hand.can_split() {
                    Err(ActionError::CannotSplit)
                } else if !family.can_split(self.options.max_splits) {
                    Err(ActionError::MaxSplitsReached)
                } else if self.reserve < family.base_bet {
                    Err(ActionError::InsufficientFunds)
                } else {
                    Ok(())
                }
            }
            Action::Surrender => {
                if self.options.surrender && seat.hand.len() == 2 && !seat.from_split {
                    Ok(())
                } else {
                    Err(ActionError::CannotSurrender)
                }
            }
        }
    }

    pub(super) fn legal_actions(&self, index: usize) -> LegalActions {
        LegalActions {
            double: self.check_action(index, Action::Double).is_ok(),
            split: self.check_action(index, Action::Split).is_ok(),
            surrender: self.check_action(index, Action::Surrender).is_ok(),
        }
    }

    /// Plays the hand at `index` until it stands, busts, doubles, surrenders
    /// or reaches 21.
    ///
    /// A split draws to this hand and leaves it in play, so the loop carries
    /// on with the same index.
    pub(super) fn play_hand<P: Player + ?Sized>(
        &mut self,
        index: usize,
        player: &mut P,
    ) -> Result<(), RoundError> {
        let mut strikes: u8 = 0;
        loop {
            let seat = &self.seats[index];
            if seat.hand.is_busted() {
                self.bust(index);
                return Ok(());
            }
            if seat.hand.total() == 21 {
                self.seats[index].status = HandStatus::Done;
                return Ok(());
            }

            let legal = self.legal_actions(index);
            self.sink.emit(&Event::HandState {
                hand_index: index,
                cards: seat.hand.cards().to_vec(),
                total: seat.hand.total(),
                soft: seat.hand.is_soft(),
                bet: seat.bet,
                legal,
            });
            let prompt = Prompt {
                hand: &seat.hand,
                hand_index: index,
                bet: seat.bet,
                dealer_upcard: self.upcard,
                legal,
            };

            let action = match player.choose(&prompt)? {
                Choice::Act(action) => match self.check_action(index, action) {
                    Ok(()) => action,
                    Err(reason) => {
                        tracing::warn!(hand = index, %action, %reason, "illegal action");
                        self.sink.emit(&Event::IllegalAction {
                            hand_index: index,
                            action,
                            reason,
                        });
                        strikes = strikes.saturating_add(1);
                        if strikes <= self.options.max_prompt_retries {
                            continue;
                        }
                        Action::Stand
                    }
                },
                Choice::Invalid => {
                    self.sink.emit(&Event::InvalidInput { hand_index: index });
                    strikes = strikes.saturating_add(1);
                    if strikes <= self.options.max_prompt_retries {
                        continue;
                    }
                    Action::Stand
                }
                Choice::Disconnected => {
                    tracing::info!(hand = index, "player disconnected, standing");
                    self.sink.emit(&Event::Disconnected { hand_index: index });
                    Action::Stand
                }
            };
            strikes = 0;

            self.sink.emit(&Event::ActionTaken {
                hand_index: index,
                action,
            });
            match action {
                Action::Hit => {
                    let card = self.shoe.draw()?;
                    self.seats[index].hand.add_card(card);
                }
                Action::Stand => {
                    self.seats[index].status = HandStatus::Done;
                    return Ok(());
                }
                Action::Double => {
                    self.double(index)?;
                    return Ok(());
                }
                Action::Split => self.split(index)?,
                Action::Surrender => {
                    self.seats[index].status = HandStatus::Surrendered;
                    return Ok(());
                }
            }
        }
    }

    fn bust(&mut self, index: usize) {
        let seat = &mut self.seats[index];
        seat.status = HandStatus::Busted;
        self.sink.emit(&Event::Busted {
            hand_index: index,
            total: seat.hand.total(),
        });
    }

    /// Doubles the bet, draws exactly one card and ends the hand.
    fn double(&mut self, index: usize) -> Result<(), RoundError> {
        let card = self.shoe.draw()?;
        let seat = &mut self.seats[index];
        self.reserve = self.reserve.saturating_sub(seat.bet);
        seat.bet = seat.bet.saturating_mul(2);
        seat.hand.add_card(card);
        if seat.hand.is_busted() {
            self.bust(index);
        } else {
            seat.status = HandStatus::Done;
        }
        Ok(())
    }

    /// Splits the pair at `index` into two hands.
    ///
    /// The sibling is inserted right after the split hand with the family's
    /// base bet. The split hand is dealt first, then the sibling.
    fn split(&mut self, index: usize) -> Result<(), RoundError> {
        let family_id = self.seats[index].family;
        let base_bet = self.families[family_id].base_bet;
        let Some(moved) = self.seats[index].hand.take_split_card() else {
            return Ok(());
        };
        self.reserve = self.reserve.saturating_sub(base_bet);
        self.seats[index].from_split = true;

        let sibling = index + 1;
        self.seats
            .insert(sibling, Seat::split_from(moved, base_bet, family_id));
        family::shift_after(&mut self.families, index);
        self.families[family_id].record_split(sibling);

        let first = self.shoe.draw()?;
        self.seats[index].hand.add_card(first);
        let second = self.shoe.draw()?;
        self.seats[sibling].hand.add_card(second);

        self.sink.emit(&Event::Split {
            hand_index: index,
            splits: self.families[family_id].splits,
        });
        Ok(())
    }
}
