use core::fmt;

use crate::error::LookupError;
use crate::hand::Hand;

use super::{Action, LegalActions, Matrix, StrategyProvider};

const HARD_MIN: u8 = 4;
const HARD_ROWS: usize = 18;
const SOFT_MIN: u8 = 12;
const SOFT_ROWS: usize = 10;
const PAIR_MIN: u8 = 2;
const PAIR_ROWS: usize = 10;
const UPCARD_MIN: u8 = 2;
const COLUMNS: usize = 10;

/// A strategy table cell.
///
/// Compound codes resolve against the hand and the legal actions when the
/// table is consulted; see [`StrategyTable::action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// `H`: hit.
    #[cfg_attr(feature = "serde", serde(rename = "H"))]
    Hit,
    /// `S`: stand.
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Stand,
    /// `D`: double with two cards, otherwise hit.
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    DoubleOrHit,
    /// `DS`: double with two cards, otherwise stand.
    #[cfg_attr(feature = "serde", serde(rename = "DS"))]
    DoubleOrStand,
    /// `R`: surrender on the first decision, otherwise hit.
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    SurrenderOrHit,
    /// `RS`: surrender on the first decision, otherwise stand.
    #[cfg_attr(feature = "serde", serde(rename = "RS"))]
    SurrenderOrStand,
    /// `Y`: split the pair.
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    Split,
    /// `N`: do not split; play the hand by its total.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    NoSplit,
}

impl Cell {
    /// Returns the short code used in printed strategy charts.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hit => "H",
            Self::Stand => "S",
            Self::DoubleOrHit => "D",
            Self::DoubleOrStand => "DS",
            Self::SurrenderOrHit => "R",
            Self::SurrenderOrStand => "RS",
            Self::Split => "Y",
            Self::NoSplit => "N",
        }
    }

    fn resolve(self, hand: &Hand, legal: LegalActions) -> Action {
        let first_two = hand.len() == 2;
        match self {
            Self::Hit | Self::NoSplit => Action::Hit,
            Self::Stand => Action::Stand,
            Self::DoubleOrHit if first_two && legal.double => Action::Double,
            Self::DoubleOrHit => Action::Hit,
            Self::DoubleOrStand if first_two && legal.double => Action::Double,
            Self::DoubleOrStand => Action::Stand,
            Self::SurrenderOrHit if first_two && legal.surrender => Action::Surrender,
            Self::SurrenderOrHit => Action::Hit,
            Self::SurrenderOrStand if first_two && legal.surrender => Action::Surrender,
            Self::SurrenderOrStand => Action::Stand,
            Self::Split if legal.split && hand.can_split() => Action::Split,
            Self::Split => Action::Hit,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A basic-strategy table: hard, soft and pair matrices against dealer
/// upcards 2 through ace.
///
/// Rows are the hand total minus the matrix minimum (4 hard, 12 soft, pair
/// card value minus 2); columns are the upcard value minus 2. Tables are
/// immutable once built into a ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyTable {
    hard: [[Cell; COLUMNS]; HARD_ROWS],
    soft: [[Cell; COLUMNS]; SOFT_ROWS],
    pair: [[Cell; COLUMNS]; PAIR_ROWS],
}

impl StrategyTable {
    /// Multi-deck basic strategy, dealer stands on soft 17, double after
    /// split, late surrender.
    #[must_use]
    pub const fn basic() -> Self {
        use Cell::{
            DoubleOrHit as D, DoubleOrStand as Ds, Hit as H, NoSplit as N, Split as Y, Stand as S,
            SurrenderOrHit as R,
        };

        Self {
            hard: [
                [H, H, H, H, H, H, H, H, H, H], // 4
                [H, H, H, H, H, H, H, H, H, H], // 5
                [H, H, H, H, H, H, H, H, H, H], // 6
                [H, H, H, H, H, H, H, H, H, H], // 7
                [H, H, H, H, H, H, H, H, H, H], // 8
                [H, D, D, D, D, H, H, H, H, H], // 9
                [D, D, D, D, D, D, D, D, H, H], // 10
                [D, D, D, D, D, D, D, D, D, D], // 11
                [H, H, S, S, S, H, H, H, H, H], // 12
                [S, S, S, S, S, H, H, H, H, H], // 13
                [S, S, S, S, S, H, H, H, H, H], // 14
                [S, S, S, S, S, H, H, H, R, H], // 15
                [S, S, S, S, S, H, H, R, R, R], // 16
                [S, S, S, S, S, S, S, S, S, S], // 17
                [S, S, S, S, S, S, S, S, S, S], // 18
                [S, S, S, S, S, S, S, S, S, S], // 19
                [S, S, S, S, S, S, S, S, S, S], // 20
                [S, S, S, S, S, S, S, S, S, S], // 21
            ],
            soft: [
                [H, H, H, H, H, H, H, H, H, H],      // 12
                [H, H, H, D, D, H, H, H, H, H],      // 13
                [H, H, H, D, D, H, H, H, H, H],      // 14
                [H, H, D, D, D, H, H, H, H, H],      // 15
                [H, H, D, D, D, H, H, H, H, H],      // 16
                [H, D, D, D, D, H, H, H, H, H],      // 17
                [S, Ds, Ds, Ds, Ds, S, S, H, H, H],  // 18
                [S, S, S, S, Ds, S, S, S, S, S],     // 19
                [S, S, S, S, S, S, S, S, S, S],      // 20
                [S, S, S, S, S, S, S, S, S, S],      // 21
            ],
            pair: [
                [Y, Y, Y, Y, Y, Y, N, N, N, N], // 2s
                [Y, Y, Y, Y, Y, Y, N, N, N, N], // 3s
                [N, N, N, Y, Y, N, N, N, N, N], // 4s
                [N, N, N, N, N, N, N, N, N, N], // 5s
                [Y, Y, Y, Y, Y, N, N, N, N, N], // 6s
                [Y, Y, Y, Y, Y, Y, N, N, N, N], // 7s
                [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y], // 8s
                [Y, Y, Y, Y, Y, N, Y, Y, N, N], // 9s
                [N, N, N, N, N, N, N, N, N, N], // tens
                [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y], // aces
            ],
        }
    }

    /// Returns the cell at (`row`, `upcard`) of `matrix`.
    ///
    /// `row` is the hand total for the hard and soft matrices and the card
    /// value (2-11) for the pair matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the coordinates fall outside the matrix.
    pub fn cell(&self, matrix: Matrix, row: u8, upcard: u8) -> Result<Cell, LookupError> {
        let (r, c) = Self::position(matrix, row, upcard)?;
        Ok(match matrix {
            Matrix::Hard => self.hard[r][c],
            Matrix::Soft => self.soft[r][c],
            Matrix::Pair => self.pair[r][c],
        })
    }

    /// Overwrites one cell.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the coordinates fall outside the matrix.
    pub fn set(&mut self, matrix: Matrix, row: u8, upcard: u8, cell: Cell) -> Result<(), LookupError> {
        let (r, c) = Self::position(matrix, row, upcard)?;
        match matrix {
            Matrix::Hard => self.hard[r][c] = cell,
            Matrix::Soft => self.soft[r][c] = cell,
            Matrix::Pair => self.pair[r][c] = cell,
        }
        Ok(())
    }

    /// Looks up the action for `hand` with only the split permission given.
    ///
    /// Doubling is assumed affordable and surrender unavailable, so `R`
    /// cells read as hit and `RS` cells as stand.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] for hand totals below 4 or upcards outside
    /// 2-11.
    pub fn get_action(
        &self,
        hand: &Hand,
        dealer_upcard: u8,
        split_allowed: bool,
    ) -> Result<Action, LookupError> {
        let legal = LegalActions {
            double: true,
            split: split_allowed,
            surrender: false,
        };
        self.action(hand, dealer_upcard, legal)
    }

    fn position(matrix: Matrix, row: u8, upcard: u8) -> Result<(usize, usize), LookupError> {
        let (min, rows) = match matrix {
            Matrix::Hard => (HARD_MIN, HARD_ROWS),
            Matrix::Soft => (SOFT_MIN, SOFT_ROWS),
            Matrix::Pair => (PAIR_MIN, PAIR_ROWS),
        };
        let err = LookupError {
            matrix,
            total: row,
            upcard,
        };

        let r = row
            .checked_sub(min)
            .map(usize::from)
            .filter(|r| *r < rows)
            .ok_or(err)?;
        let c = upcard
            .checked_sub(UPCARD_MIN)
            .map(usize::from)
            .filter(|c| *c < COLUMNS)
            .ok_or(err)?;
        Ok((r, c))
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::basic()
    }
}

impl StrategyProvider for StrategyTable {
    /// Pairs are checked first: a `Y` pair cell splits whenever splitting is
    /// legal. Otherwise the soft or hard cell for the hand total decides.
    fn action(
        &self,
        hand: &Hand,
        dealer_upcard: u8,
        legal: LegalActions,
    ) -> Result<Action, LookupError> {
        if legal.split && hand.can_split() {
            let value = hand.first().map_or(0, |card| card.value());
            if self.cell(Matrix::Pair, value, dealer_upcard)? == Cell::Split {
                return Ok(Action::Split);
            }
        }

        let matrix = if hand.is_soft() {
            Matrix::Soft
        } else {
            Matrix::Hard
        };
        let cell = self.cell(matrix, hand.total(), dealer_upcard)?;
        Ok(cell.resolve(hand, legal))
    }
}
