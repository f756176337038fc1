//! Table rule options.

use crate::error::ConfigError;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Rounds a non-negative amount to a whole unit.
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        round_amount(amount, self)
    }
}

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Table rules for the round engine.
///
/// Use the builder methods to customize options:
///
/// ```
/// use bjcount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_max_splits(3)
///     .with_surrender(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Fraction of the shoe dealt before reshuffling. The shoe is replaced once
    /// fewer than `52 × decks × (1 − penetration)` cards remain.
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// Maximum number of splits per hand family.
    pub max_splits: u8,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounds blackjack payouts to whole units. `None` pays the exact ratio.
    pub rounding_blackjack: Option<RoundingMode>,
    /// Rounds the half bet lost on surrender to whole units, never below one.
    /// `None` forfeits exactly half.
    pub rounding_surrender: Option<RoundingMode>,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether split hands may double.
    pub double_after_split: bool,
    /// Whether late surrender is offered on the first decision.
    pub surrender: bool,
    /// How many invalid or illegal choices a player may make on one decision
    /// before the hand stands.
    pub max_prompt_retries: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            penetration: 0.75,
            max_splits: 4,
            blackjack_pays: 1.5,
            rounding_blackjack: None,
            rounding_surrender: None,
            stand_on_soft_17: true,
            double_after_split: true,
            surrender: false,
            max_prompt_retries: 3,
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for zero decks, a penetration outside
    /// `0.0..1.0`, or a negative or non-finite blackjack payout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if !(0.0..1.0).contains(&self.penetration) {
            return Err(ConfigError::InvalidPenetration);
        }
        if !self.blackjack_pays.is_finite() || self.blackjack_pays < 0.0 {
            return Err(ConfigError::InvalidPayout);
        }
        Ok(())
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the maximum number of splits per hand family.
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u8) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(Some(RoundingMode::Down));
    /// assert_eq!(options.rounding_blackjack, Some(RoundingMode::Down));
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: Option<RoundingMode>) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for surrender losses.
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: Option<RoundingMode>) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether split hands may double.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether late surrender is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_surrender(true);
    /// assert!(options.surrender);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets how many invalid choices are re-prompted before a hand stands.
    #[must_use]
    pub const fn with_max_prompt_retries(mut self, retries: u8) -> Self {
        self.max_prompt_retries = retries;
        self
    }
}
