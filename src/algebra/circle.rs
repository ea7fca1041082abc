//! Circle in bend / bend-center form.
//!
//! A circle is carried as its signed curvature (bend) together with the
//! product of bend and center (bend-center). Both quantities satisfy the
//! generalized Descartes relation for a mutually tangent quadruple, so
//! arithmetic on Circle is componentwise over the pair and one generic
//! solve serves both at once.

use crate::algebra::{Complex, DescartesOps};
use crate::precision;
use crate::{GasketError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A circle as (bend, bend * center).
///
/// The bend is the reciprocal of the signed radius. A negative bend marks
/// a circle whose inside is the unbounded region, used for the outer
/// bounding circle of a gasket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    bend: f64,
    bend_center: Complex,
}

impl Circle {
    /// Creates a circle from a signed radius and center.
    ///
    /// Fails with a numeric-domain error for a zero radius.
    pub fn from_radius(radius: f64, center: Point2<f64>) -> Result<Self> {
        if radius.abs() < precision::RESOLUTION {
            return Err(GasketError::NumericDomain(
                "circle radius must be nonzero".to_string(),
            ));
        }
        Ok(Self::from_bend(1.0 / radius, center))
    }

    /// Creates a circle from a signed bend and center.
    #[inline]
    pub fn from_bend(bend: f64, center: Point2<f64>) -> Self {
        Self {
            bend,
            bend_center: Complex::from_parts(bend * center.x, bend * center.y),
        }
    }

    /// Creates a circle directly from its two Descartes quantities.
    #[inline]
    pub const fn from_parts(bend: f64, bend_center: Complex) -> Self {
        Self { bend, bend_center }
    }

    /// Returns the signed curvature.
    #[inline]
    pub const fn bend(&self) -> f64 {
        self.bend
    }

    /// Returns the bend-center product.
    #[inline]
    pub const fn bend_center(&self) -> Complex {
        self.bend_center
    }

    /// Returns the center, recovered as bend-center / bend.
    /// Meaningless for a zero bend (a straight line).
    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            self.bend_center.re() / self.bend,
            self.bend_center.im() / self.bend,
        )
    }

    /// Returns the unsigned radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        (1.0 / self.bend).abs()
    }

    /// Checks mutual tangency with another circle within tolerance.
    ///
    /// Externally tangent circles touch at center distance r1 + r2; a
    /// circle nested inside a bounding circle touches it at center
    /// distance |r1 - r2|.
    pub fn is_tangent_to(&self, other: &Circle, tolerance: f64) -> bool {
        let d = (self.center() - other.center()).norm();
        let r1 = self.radius();
        let r2 = other.radius();
        (d - (r1 + r2)).abs() <= tolerance || (d - (r1 - r2).abs()).abs() <= tolerance
    }

    /// Returns true if the two circles coincide within tolerance, in
    /// both center and radius.
    pub fn is_equal(&self, other: &Circle, tolerance: f64) -> bool {
        (self.center() - other.center()).norm() <= tolerance
            && (self.radius() - other.radius()).abs() <= tolerance
    }
}

// Componentwise algebra over the (bend, bend-center) pair. There is no
// cross-field coupling: the Descartes solve at Circle type must act on
// each quantity exactly as it would on the bare scalar.

impl Add for Circle {
    type Output = Circle;
    #[inline]
    fn add(self, other: Circle) -> Circle {
        Circle {
            bend: self.bend + other.bend,
            bend_center: self.bend_center + other.bend_center,
        }
    }
}

impl Sub for Circle {
    type Output = Circle;
    #[inline]
    fn sub(self, other: Circle) -> Circle {
        Circle {
            bend: self.bend - other.bend,
            bend_center: self.bend_center - other.bend_center,
        }
    }
}

impl Mul for Circle {
    type Output = Circle;
    #[inline]
    fn mul(self, other: Circle) -> Circle {
        Circle {
            bend: self.bend * other.bend,
            bend_center: self.bend_center * other.bend_center,
        }
    }
}

impl Neg for Circle {
    type Output = Circle;
    #[inline]
    fn neg(self) -> Circle {
        Circle {
            bend: -self.bend,
            bend_center: -self.bend_center,
        }
    }
}

impl From<f64> for Circle {
    /// Scalar lift: both quantities take the scalar's value.
    #[inline]
    fn from(value: f64) -> Self {
        Circle {
            bend: value,
            bend_center: Complex::from(value),
        }
    }
}

impl DescartesOps for Circle {
    #[inline]
    fn zero() -> Self {
        Circle {
            bend: 0.0,
            bend_center: Complex::new(),
        }
    }

    #[inline]
    fn sqrt(self) -> Self {
        Circle {
            bend: self.bend.sqrt(),
            bend_center: Complex::sqrt(self.bend_center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_from_radius() {
        let c = Circle::from_radius(0.5, Point2::new(1.0, 2.0)).unwrap();
        assert!((c.bend() - 2.0).abs() < 1e-12);
        assert!((c.radius() - 0.5).abs() < 1e-12);
        let center = c.center();
        assert!((center.x - 1.0).abs() < 1e-12);
        assert!((center.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_from_radius_zero() {
        assert!(Circle::from_radius(0.0, Point2::origin()).is_err());
    }

    #[test]
    fn test_circle_negative_bend_radius_unsigned() {
        let c = Circle::from_bend(-2.0, Point2::new(0.5, 0.5));
        assert!((c.radius() - 0.5).abs() < 1e-12);
        let center = c.center();
        assert!((center.x - 0.5).abs() < 1e-12);
        assert!((center.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_circle_bend_center_invariant() {
        let c = Circle::from_bend(3.0, Point2::new(-1.0, 2.0));
        assert_eq!(c.bend_center(), Complex::from_parts(-3.0, 6.0));
    }

    #[test]
    fn test_circle_componentwise_ops() {
        let a = Circle::from_parts(2.0, Complex::from_parts(1.0, 1.0));
        let b = Circle::from_parts(3.0, Complex::from_parts(0.0, 2.0));

        let sum = a + b;
        assert_eq!(sum.bend(), 5.0);
        assert_eq!(sum.bend_center(), Complex::from_parts(1.0, 3.0));

        let diff = a - b;
        assert_eq!(diff.bend(), -1.0);
        assert_eq!(diff.bend_center(), Complex::from_parts(1.0, -1.0));

        // Bend multiplies as a real, bend-center as a complex number.
        let prod = a * b;
        assert_eq!(prod.bend(), 6.0);
        assert_eq!(prod.bend_center(), Complex::from_parts(-2.0, 2.0));

        let neg = -a;
        assert_eq!(neg.bend(), -2.0);
        assert_eq!(neg.bend_center(), Complex::from_parts(-1.0, -1.0));
    }

    #[test]
    fn test_circle_sqrt_componentwise() {
        let c = Circle::from_parts(4.0, Complex::from_parts(-1.0, 0.0));
        let r = DescartesOps::sqrt(c);
        assert!((r.bend() - 2.0).abs() < 1e-12);
        assert!(r.bend_center().is_equal(&Complex::from_parts(0.0, 1.0), 1e-12));
    }

    #[test]
    fn test_circle_scalar_lift() {
        let c: Circle = 2.0.into();
        assert_eq!(c.bend(), 2.0);
        assert_eq!(c.bend_center(), Complex::from_parts(2.0, 0.0));
    }

    #[test]
    fn test_circle_tangency_external() {
        let a = Circle::from_radius(1.0, Point2::new(0.0, 0.0)).unwrap();
        let b = Circle::from_radius(1.0, Point2::new(2.0, 0.0)).unwrap();
        let c = Circle::from_radius(1.0, Point2::new(5.0, 0.0)).unwrap();
        assert!(a.is_tangent_to(&b, 1e-9));
        assert!(!a.is_tangent_to(&c, 1e-9));
    }

    #[test]
    fn test_circle_tangency_internal() {
        // Unit circle nested inside a bounding circle of radius 2.
        let outer = Circle::from_radius(-2.0, Point2::new(0.0, 0.0)).unwrap();
        let inner = Circle::from_radius(1.0, Point2::new(1.0, 0.0)).unwrap();
        assert!(outer.is_tangent_to(&inner, 1e-9));
    }

    #[test]
    fn test_circle_is_equal() {
        let a = Circle::from_radius(1.0, Point2::new(0.0, 0.0)).unwrap();
        let b = Circle::from_radius(1.0 + 1e-12, Point2::new(0.0, 0.0)).unwrap();
        let c = Circle::from_radius(1.0, Point2::new(0.1, 0.0)).unwrap();
        assert!(a.is_equal(&b, 1e-9));
        assert!(!a.is_equal(&c, 1e-9));
    }
}
