//! Initial configuration builder.
//!
//! Places an explicit, mutually tangent seed quadruple for three given
//! bends: two circles tangent along the x-axis, a third positioned by
//! the law of cosines over pairwise radius sums, and a fourth from the
//! Descartes solver.

use crate::algebra::Circle;
use crate::descartes::descartes;
use crate::precision;
use crate::{GasketError, Result};
use nalgebra::Point2;

/// Builds the four mutually tangent starting circles for three bends.
///
/// Circle 1 sits at the origin. Circle 2 is placed tangent to it along
/// the x-axis at signed distance r1 + r2. Circle 3 closes the triangle
/// of centers whose side lengths are the pairwise radius sums. Circle 4
/// is the first Descartes solution over the first three; the companion
/// solution belongs to the opposite tangency side and is discarded.
///
/// Fails with a numeric-domain error if any bend is zero, if the first
/// two circles would share a center, or if the bends admit no mutually
/// tangent placement (negative discriminant in the third circle's
/// position).
pub fn initial_config(b1: f64, b2: f64, b3: f64) -> Result<[Circle; 4]> {
    for bend in [b1, b2, b3] {
        if bend.abs() < precision::RESOLUTION {
            return Err(GasketError::NumericDomain(
                "seed bends must be nonzero".to_string(),
            ));
        }
    }

    let r1 = 1.0 / b1;
    let r2 = 1.0 / b2;
    let r3 = 1.0 / b3;

    // Triangle of centers: each side is the (signed) sum of two radii.
    let a = r1 + r2;
    let b = r1 + r3;
    let c = r2 + r3;

    if a.abs() < precision::RESOLUTION {
        return Err(GasketError::NumericDomain(format!(
            "bends ({}, {}) cancel and give coincident centers",
            b1, b2
        )));
    }

    let circle1 = Circle::from_bend(b1, Point2::origin());
    let circle2 = Circle::from_bend(b2, Point2::new(a, 0.0));

    // Law of cosines against the edge lying on the x-axis.
    let x = (b * b + a * a - c * c) / (2.0 * a);
    let disc = b * b - x * x;
    if disc < 0.0 {
        return Err(GasketError::NumericDomain(format!(
            "bends ({}, {}, {}) admit no mutually tangent placement",
            b1, b2, b3
        )));
    }
    let circle3 = Circle::from_bend(b3, Point2::new(x, disc.sqrt()));

    let (circle4, _) = descartes(&[circle1, circle2, circle3])?;

    Ok([circle1, circle2, circle3, circle4])
}
