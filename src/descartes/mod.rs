//! Descartes Circle Theorem solver.
//!
//! Given three values satisfying the generalized Descartes relation,
//! computes the two candidates for a fourth. The solve is written once
//! against the DescartesOps interface, so the same code runs over real
//! bends, complex bend-centers, and whole circles (where the two
//! quantities travel together through one call and cannot end up paired
//! with each other's companion root).

use crate::algebra::DescartesOps;
use crate::{GasketError, Result};

/// Solves the generalized Descartes relation for the fourth value.
///
/// For inputs b1, b2, b3 the two solutions are s + r and s - r, where
/// s = b1 + b2 + b3 and r = 2 * sqrt(b1*b2 + b1*b3 + b2*b3).
///
/// Fails with InvalidArity unless exactly three values are supplied.
pub fn descartes<T: DescartesOps>(bends: &[T]) -> Result<(T, T)> {
    let (b1, b2, b3) = match bends {
        &[b1, b2, b3] => (b1, b2, b3),
        _ => {
            return Err(GasketError::InvalidArity(format!(
                "Descartes solve takes exactly 3 values, got {}",
                bends.len()
            )))
        }
    };
    let sum = b1 + b2 + b3;
    let root = (b1 * b2 + b1 * b3 + b2 * b3).sqrt();
    let spread = root + root;
    Ok((sum + spread, sum - spread))
}

/// Returns the dual of a known fourth value without re-solving.
///
/// The two solutions of the Descartes relation sum to twice the sum of
/// the remaining three members, so the dual is 2*(a + b + c) - selected.
/// Exact (no square root involved), and when evaluated at Circle type it
/// keeps bend and bend-center paired. Prefer this over a second
/// descartes() call wherever the dual of a known solution is wanted.
#[inline]
pub fn other<T: DescartesOps>(others: &[T; 3], selected: T) -> T {
    let sum = others.iter().fold(T::zero(), |acc, &value| acc + value);
    sum + sum - selected
}
