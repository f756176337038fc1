//! The multi-deck shoe.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{ConfigError, EmptyShoeError};

/// An ordered stack of cards dealt from the back.
///
/// A shoe is owned by exactly one session; concurrent sessions need their own
/// shoes. It only ever shrinks until it is replaced wholesale by
/// [`Shoe::reshuffle`].
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds an unshuffled shoe of `decks` decks in fixed suit/rank order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }

        Ok(Self {
            cards: fresh_cards(decks),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Builds a shoe and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn shuffled(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        let mut shoe = Self::new(decks, seed)?;
        shoe.shuffle();
        Ok(shoe)
    }

    /// Builds a shoe that deals exactly `draws`, in order, and is then empty.
    ///
    /// `decks` still sizes the shoe for true-count and penetration purposes.
    /// Reshuffling replaces the stacked cards with a regular shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn stacked(decks: u8, draws: &[Card], seed: u64) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self {
            cards,
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Permutes the remaining cards uniformly at random.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Replaces the shoe with a full, freshly shuffled one.
    pub fn reshuffle(&mut self) {
        self.cards = fresh_cards(self.decks);
        self.shuffle();
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns whether the shoe has been dealt past `penetration`.
    ///
    /// The shoe needs reshuffling once fewer than
    /// `capacity × (1 − penetration)` cards remain. A penetration of 0
    /// disables reshuffling.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration == 0.0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let threshold = self.capacity() as f64 * (1.0 - penetration);
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining = self.remaining() as f64;

        remaining < threshold
    }
}

fn fresh_cards(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}
