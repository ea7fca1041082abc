//! Gasket tree generation.
//!
//! Each of the four seed circles roots an infinite ternary tree of
//! kissing sets reachable by re-selecting and flipping non-selected
//! members. Every non-seed circle of the full gasket appears as the
//! selected value of exactly one node across the four trees, and the
//! seeds never reappear. The tree is never materialized: children exist
//! only as the computation performed by branches(), so a pruned
//! traversal can cut unbounded growth before it happens.

use crate::algebra::Circle;
use crate::kissing::{kissing_sets, KissingSet};

/// A lazily unfolded node of a gasket tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasketTree {
    node: KissingSet<Circle>,
}

impl GasketTree {
    /// Wraps a kissing set as a tree node.
    #[inline]
    pub const fn new(node: KissingSet<Circle>) -> Self {
        Self { node }
    }

    /// Returns the node's kissing set.
    #[inline]
    pub fn node(&self) -> &KissingSet<Circle> {
        &self.node
    }

    /// Returns the circle this node contributes to the gasket.
    #[inline]
    pub fn circle(&self) -> Circle {
        self.node.selected()
    }

    /// Unfolds the three child subtrees.
    ///
    /// Re-selecting before flipping drives the exploration: the
    /// re-selection changes which circle is active, and the flip then
    /// computes that circle's one unknown neighbor. The member just
    /// flipped away from sits among the fixed partners of every child,
    /// so no child regenerates its parent's circle.
    pub fn branches(&self) -> [GasketTree; 3] {
        self.node
            .select_others()
            .map(|ks| GasketTree::new(ks.flip_selected()))
    }
}

/// Builds the four gasket trees for a seed quadruple.
///
/// Each seed's kissing set is flipped once up front so every root
/// already carries a non-seed circle; the seeds themselves are
/// contributed separately by the assembly.
pub fn apollonian_trees(seeds: &[Circle; 4]) -> [GasketTree; 4] {
    kissing_sets(*seeds).map(|ks| GasketTree::new(ks.flip_selected()))
}
