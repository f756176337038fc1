use alloc::vec::Vec;

use crate::error::LookupError;

use super::{Cell, Matrix, StrategyTable};

/// Coordinates of a strategy table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayCell {
    /// Matrix holding the cell.
    pub matrix: Matrix,
    /// Hand total, or pair card value for the pair matrix.
    pub row: u8,
    /// Dealer upcard value (2-11).
    pub upcard: u8,
}

/// A count-dependent deviation from basic strategy.
///
/// At a true count of at least `index` the cell reads `at_or_above`,
/// otherwise `below`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPlay {
    /// The deviating cell.
    pub cell: PlayCell,
    /// True count at which the deviation starts.
    pub index: f64,
    /// Cell value at or above the index.
    pub at_or_above: Cell,
    /// Cell value below the index.
    pub below: Cell,
}

const fn play(matrix: Matrix, row: u8, upcard: u8, index: f64, at_or_above: Cell) -> IndexPlay {
    let below = match matrix {
        Matrix::Pair => Cell::NoSplit,
        Matrix::Hard | Matrix::Soft => Cell::Hit,
    };
    IndexPlay {
        cell: PlayCell {
            matrix,
            row,
            upcard,
        },
        index,
        at_or_above,
        below,
    }
}

/// Illustrious 18 and Fab 4 style deviations, indexed by true count.
pub const INDEX_PLAYS: [IndexPlay; 25] = [
    play(Matrix::Hard, 13, 10, 8.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 14, 9, 7.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 15, 8, 7.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 10, 10, 7.0, Cell::DoubleOrHit),
    play(Matrix::Pair, 10, 5, 6.0, Cell::Split),
    play(Matrix::Pair, 10, 6, 5.0, Cell::Split),
    play(Matrix::Hard, 14, 11, 5.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 9, 7, 5.0, Cell::DoubleOrHit),
    play(Matrix::Hard, 10, 11, 5.0, Cell::DoubleOrHit),
    play(Matrix::Hard, 16, 8, 4.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 14, 10, 3.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 12, 2, 3.0, Cell::Stand),
    play(Matrix::Hard, 15, 9, 2.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 15, 11, 2.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 9, 2, 2.0, Cell::DoubleOrHit),
    play(Matrix::Hard, 12, 3, 2.0, Cell::Stand),
    play(Matrix::Hard, 15, 10, 0.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 16, 11, 0.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 12, 4, 0.0, Cell::Stand),
    play(Matrix::Hard, 16, 9, -1.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 16, 10, -1.0, Cell::SurrenderOrHit),
    play(Matrix::Hard, 12, 6, -1.0, Cell::Stand),
    play(Matrix::Hard, 13, 2, -1.0, Cell::Stand),
    play(Matrix::Hard, 12, 5, -2.0, Cell::Stand),
    play(Matrix::Hard, 13, 3, -2.0, Cell::Stand),
];

/// Bucket minimums of the default ladder, highest first.
pub const DEFAULT_THRESHOLDS: [f64; 10] = [8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 0.0, -1.0, -2.0];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Rung {
    min_true_count: f64,
    table: StrategyTable,
}

/// Strategy tables keyed by inclusive true-count lower bounds.
///
/// Rungs are evaluated from the highest bound down and the first match wins.
/// Counts below every rung (or NaN) select the floor table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyLadder {
    rungs: Vec<Rung>,
    floor: StrategyTable,
}

impl StrategyLadder {
    /// Creates a ladder with only a floor table.
    #[must_use]
    pub const fn new(floor: StrategyTable) -> Self {
        Self {
            rungs: Vec::new(),
            floor,
        }
    }

    /// Adds a table used from `min_true_count` upward, replacing any rung with
    /// the same bound.
    #[must_use]
    pub fn with_rung(mut self, min_true_count: f64, table: StrategyTable) -> Self {
        self.rungs
            .retain(|rung| rung.min_true_count.total_cmp(&min_true_count).is_ne());
        self.rungs.push(Rung {
            min_true_count,
            table,
        });
        self.rungs
            .sort_by(|a, b| b.min_true_count.total_cmp(&a.min_true_count));
        self
    }

    /// Builds one table per threshold from `base` and a list of index plays.
    ///
    /// The table for threshold `m` applies every play whose index is at most
    /// `m`; the floor table applies none of them.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if a play names a cell outside the table.
    pub fn from_index_plays(
        base: &StrategyTable,
        plays: &[IndexPlay],
        thresholds: &[f64],
    ) -> Result<Self, LookupError> {
        let mut ladder = Self::new(Self::bucket(base, plays, f64::NEG_INFINITY)?);
        for &min in thresholds {
            ladder = ladder.with_rung(min, Self::bucket(base, plays, min)?);
        }
        Ok(ladder)
    }

    /// The default ladder: basic strategy plus [`INDEX_PLAYS`] over
    /// [`DEFAULT_THRESHOLDS`].
    #[must_use]
    pub fn illustrious() -> Self {
        let ladder =
            Self::from_index_plays(&StrategyTable::basic(), &INDEX_PLAYS, &DEFAULT_THRESHOLDS);
        debug_assert!(ladder.is_ok(), "built-in index play outside the table: {ladder:?}");
        ladder.unwrap_or_else(|_| Self::new(StrategyTable::basic()))
    }

    /// Selects the table for a true count.
    #[must_use]
    pub fn select_table(&self, true_count: f64) -> &StrategyTable {
        self.rungs
            .iter()
            .find(|rung| true_count >= rung.min_true_count)
            .map_or(&self.floor, |rung| &rung.table)
    }

    /// Returns the lower bound of the rung selected for a true count, or
    /// `None` when the floor table applies.
    #[must_use]
    pub fn bucket_for(&self, true_count: f64) -> Option<f64> {
        self.rungs
            .iter()
            .find(|rung| true_count >= rung.min_true_count)
            .map(|rung| rung.min_true_count)
    }

    /// Returns the number of tables, floor included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len() + 1
    }

    /// Always `false`: a ladder has at least its floor table.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    fn bucket(
        base: &StrategyTable,
        plays: &[IndexPlay],
        min: f64,
    ) -> Result<StrategyTable, LookupError> {
        let mut table = base.clone();
        for play in plays {
            let cell = if min >= play.index {
                play.at_or_above
            } else {
                play.below
            };
            table.set(play.cell.matrix, play.cell.row, play.cell.upcard, cell)?;
        }
        Ok(table)
    }
}

impl Default for StrategyLadder {
    fn default() -> Self {
        Self::illustrious()
    }
}
