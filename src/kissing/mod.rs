//! Kissing set model.
//!
//! A kissing set is a quadruple of mutually tangent values with one
//! distinguished "selected" member, the one most recently produced by a
//! flip. Tracking the selection lets the tree generator obtain each new
//! neighbor from the exact dual shortcut instead of re-running the
//! solver.

use crate::algebra::DescartesOps;
use crate::descartes::other;

/// Four tangency-related values, one selected.
///
/// Generic so it can hold raw bends (for algebraic checks) or whole
/// circles (for generation). The fixed-size partner array keeps the
/// exactly-three invariant static; partner order only matters for
/// enumeration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KissingSet<T> {
    selected: T,
    others: [T; 3],
}

impl<T: Copy> KissingSet<T> {
    /// Creates a kissing set from a selected value and its three
    /// partners.
    #[inline]
    pub const fn new(selected: T, others: [T; 3]) -> Self {
        Self { selected, others }
    }

    /// Returns the selected member.
    #[inline]
    pub fn selected(&self) -> T {
        self.selected
    }

    /// Returns the three non-selected members.
    #[inline]
    pub fn others(&self) -> &[T; 3] {
        &self.others
    }

    /// Re-selects each of the three partners in turn.
    ///
    /// The current selection is demoted into the partner list of every
    /// result, so each returned set has a different member active and
    /// all four values are preserved.
    pub fn select_others(&self) -> [KissingSet<T>; 3] {
        let [a, b, c] = self.others;
        let s = self.selected;
        [
            KissingSet::new(a, [b, c, s]),
            KissingSet::new(b, [a, c, s]),
            KissingSet::new(c, [a, b, s]),
        ]
    }
}

impl<T: DescartesOps> KissingSet<T> {
    /// Replaces the selected member with its tangent dual.
    ///
    /// The partners are unchanged and the selection stays on the new
    /// value. Against fixed partners the dual is an involution; the tree
    /// generator reaches new circles by re-selecting between flips.
    #[inline]
    pub fn flip_selected(&self) -> Self {
        Self {
            selected: other(&self.others, self.selected),
            others: self.others,
        }
    }
}

/// Enumerates the four kissing sets of a tangent quadruple, selecting
/// each member exactly once with the rest in their original relative
/// order.
pub fn kissing_sets<T: Copy>(items: [T; 4]) -> [KissingSet<T>; 4] {
    let [a, b, c, d] = items;
    [
        KissingSet::new(a, [b, c, d]),
        KissingSet::new(b, [a, c, d]),
        KissingSet::new(c, [a, b, d]),
        KissingSet::new(d, [a, b, c]),
    ]
}
