//! Where the round engine gets its decisions.
//!
//! A [`Player`] is asked once per decision point and answers synchronously.
//! [`StrategyPlayer`] answers from a [`StrategyProvider`]; [`FnPlayer`] wraps a
//! closure, which is how an interactive transport plugs in.

use crate::card::Card;
use crate::error::LookupError;
use crate::hand::Hand;
use crate::strategy::{Action, LegalActions, StrategyProvider};

/// Everything a player sees when deciding one hand.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    /// The hand being decided.
    pub hand: &'a Hand,
    /// Its position among the round's hands.
    pub hand_index: usize,
    /// Its current bet.
    pub bet: usize,
    /// The dealer's face-up card.
    pub dealer_upcard: Card,
    /// Optional actions that are legal right now.
    pub legal: LegalActions,
}

/// A player's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take this action.
    Act(Action),
    /// The input did not name an action; ask again.
    Invalid,
    /// The player is gone; stand the hand.
    Disconnected,
}

/// A source of decisions for the round engine.
pub trait Player {
    /// Answers a prompt.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if a strategy lookup fails; the round aborts.
    fn choose(&mut self, prompt: &Prompt<'_>) -> Result<Choice, LookupError>;
}

/// Plays every decision from a strategy provider.
#[derive(Debug, Clone, Copy)]
pub struct StrategyPlayer<S> {
    strategy: S,
}

impl<S: StrategyProvider> StrategyPlayer<S> {
    /// Wraps a provider.
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }
}

impl<S: StrategyProvider> Player for StrategyPlayer<S> {
    fn choose(&mut self, prompt: &Prompt<'_>) -> Result<Choice, LookupError> {
        let action = self
            .strategy
            .action(prompt.hand, prompt.dealer_upcard.value(), prompt.legal)?;
        Ok(Choice::Act(action))
    }
}

/// Adapts a closure into a [`Player`].
pub struct FnPlayer<F> {
    choose: F,
}

impl<F: FnMut(&Prompt<'_>) -> Choice> FnPlayer<F> {
    /// Wraps a closure.
    pub const fn new(choose: F) -> Self {
        Self { choose }
    }
}

impl<F: FnMut(&Prompt<'_>) -> Choice> Player for FnPlayer<F> {
    fn choose(&mut self, prompt: &Prompt<'_>) -> Result<Choice, LookupError> {
        Ok((self.choose)(prompt))
    }
}
