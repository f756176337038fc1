//! Count-keyed bet sizing.

use alloc::vec::Vec;

/// A monotonic step function from true count to bet multiplier.
///
/// Steps are inclusive lower bounds checked from the highest down; counts below
/// every step use the floor multiplier. A multiplier of 0 means "sit out".
///
/// ```
/// use bjcount::BetRamp;
///
/// let ramp = BetRamp::default();
/// assert_eq!(ramp.multiplier(12.0), 10);
/// assert_eq!(ramp.multiplier(2.5), 2);
/// assert_eq!(ramp.multiplier(-3.0), 1);
/// assert_eq!(ramp.multiplier(-6.0), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetRamp {
    steps: Vec<(f64, usize)>,
    floor: usize,
}

impl BetRamp {
    /// Creates a ramp with no steps that always returns `floor`.
    #[must_use]
    pub const fn flat(floor: usize) -> Self {
        Self {
            steps: Vec::new(),
            floor,
        }
    }

    /// Adds a step: at a true count of at least `min_true_count` the bet is
    /// multiplied by `multiplier`. A step with the same bound is replaced.
    #[must_use]
    pub fn with_step(mut self, min_true_count: f64, multiplier: usize) -> Self {
        self.steps
            .retain(|(min, _)| min.total_cmp(&min_true_count).is_ne());
        self.steps.push((min_true_count, multiplier));
        self.steps.sort_by(|a, b| b.0.total_cmp(&a.0));
        self
    }

    /// Returns the multiplier for a true count.
    #[must_use]
    pub fn multiplier(&self, true_count: f64) -> usize {
        self.steps
            .iter()
            .find(|(min, _)| true_count >= *min)
            .map_or(self.floor, |(_, multiplier)| *multiplier)
    }

    /// Returns the bet for `base_bet` at a true count, capped at `bankroll`.
    #[must_use]
    pub fn bet(&self, base_bet: usize, true_count: f64, bankroll: usize) -> usize {
        base_bet
            .saturating_mul(self.multiplier(true_count))
            .min(bankroll)
    }
}

impl Default for BetRamp {
    fn default() -> Self {
        Self::flat(0)
            .with_step(10.0, 10)
            .with_step(5.0, 4)
            .with_step(2.0, 2)
            .with_step(0.0, 1)
            .with_step(-5.0, 1)
    }
}
