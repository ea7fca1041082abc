//! Precision constants for geometric comparisons.
//!
//! Coincidence and tangency checks throughout the crate compare against
//! these values rather than ad hoc literals.

/// Confusion tolerance for coincidence of two circles.
/// Two circles coincide if both their center distance and their radius
/// difference are below CONFUSION.
pub const CONFUSION: f64 = 1.0e-9;

/// Square of CONFUSION for performance.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Tangency tolerance. Two circles are tangent if their center distance
/// differs from the sum (externally) or the absolute difference
/// (internally) of their radii by less than this.
pub const TANGENCY: f64 = CONFUSION;

/// Fundamental numeric resolution for zero-bend checks.
/// A bend below RESOLUTION denotes a straight line, which the kernel
/// does not model.
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;
