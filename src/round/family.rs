//! Split bookkeeping.

use alloc::vec::Vec;

/// Hands descended from one original hand through splits.
///
/// Members are positions in the round's hand list, kept sorted. The family
/// shares one split budget and one base bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HandFamily {
    pub(crate) members: Vec<usize>,
    pub(crate) splits: u8,
    pub(crate) base_bet: usize,
}

impl HandFamily {
    pub(crate) fn new(seat: usize, base_bet: usize) -> Self {
        Self {
            members: alloc::vec![seat],
            splits: 0,
            base_bet,
        }
    }

    /// Returns whether the family may split again under `max_splits`.
    pub(crate) fn can_split(&self, max_splits: u8) -> bool {
        self.splits < max_splits && self.members.len() <= usize::from(max_splits)
    }

    pub(crate) fn record_split(&mut self, sibling: usize) {
        self.members.push(sibling);
        self.members.sort_unstable();
        self.splits = self.splits.saturating_add(1);
    }
}

/// Renumbers members after a hand is inserted right after `index`.
pub(crate) fn shift_after(families: &mut [HandFamily], index: usize) {
    for family in families {
        for member in &mut family.members {
            if *member > index {
                *member += 1;
            }
        }
    }
}
