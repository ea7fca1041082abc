//! Pruned traversal and gasket assembly.
//!
//! Walks the four gasket trees depth-first, discarding every node (and
//! its never-built subtree) whose circle falls below the radius
//! threshold, and flattens the survivors together with the seeds into
//! the final gasket.

use crate::algebra::Circle;
use crate::seed::initial_config;
use crate::tree::{apollonian_trees, GasketTree};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A finite, flattened Apollonian gasket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gasket {
    /// The four seed circles followed by every surviving tree circle,
    /// in depth-first traversal order with trees in seed order.
    pub circles: Vec<Circle>,
}

impl Gasket {
    /// Number of circles in the gasket.
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns true if the gasket holds no circles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Depth-first collection with prune-at-shallowest-failure.
///
/// The subtree below a failing node is never unfolded, which is what
/// turns the conceptually infinite tree into a finite computation.
fn collect_pruned(tree: &GasketTree, threshold: f64, out: &mut Vec<Circle>) {
    let circle = tree.circle();
    if circle.radius() < threshold {
        return;
    }
    out.push(circle);
    for branch in tree.branches() {
        collect_pruned(&branch, threshold, out);
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_trees(trees: &[GasketTree; 4], threshold: f64) -> Vec<Circle> {
    let mut circles = Vec::new();
    for tree in trees {
        collect_pruned(tree, threshold, &mut circles);
    }
    circles
}

/// The four trees are independent, so they fan out onto the rayon pool;
/// concatenating per-tree results in tree order keeps the output
/// identical to the serial traversal.
#[cfg(feature = "parallel")]
fn collect_trees(trees: &[GasketTree; 4], threshold: f64) -> Vec<Circle> {
    use rayon::prelude::*;

    let per_tree: Vec<Vec<Circle>> = trees
        .as_slice()
        .par_iter()
        .map(|tree| {
            let mut circles = Vec::new();
            collect_pruned(tree, threshold, &mut circles);
            circles
        })
        .collect();
    per_tree.into_iter().flatten().collect()
}

/// Generates the finite gasket for a seed quadruple.
///
/// The four seeds lead the sequence and are exempt from the threshold;
/// every other circle's radius is at least `threshold`.
pub fn apollonian(threshold: f64, seeds: [Circle; 4]) -> Vec<Circle> {
    let trees = apollonian_trees(&seeds);
    let mut circles = seeds.to_vec();
    circles.extend(collect_trees(&trees, threshold));
    circles
}

/// Generates the Apollonian gasket for three seed bends.
///
/// The single entry point: builds the seed configuration, then walks
/// the four pruned trees.
pub fn apollonian_gasket(threshold: f64, b1: f64, b2: f64, b3: f64) -> Result<Gasket> {
    let seeds = initial_config(b1, b2, b3)?;
    Ok(Gasket {
        circles: apollonian(threshold, seeds),
    })
}
