//! Complex number value type.
//!
//! Serves double duty as a point in the plane (circle centers) and as
//! the bend-center quantity of the Descartes relation. Multiplication
//! and square root are the true complex operations, not componentwise
//! ones.

use crate::algebra::DescartesOps;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Complex number {re, im} over f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Creates the zero value (0 + 0i).
    #[inline]
    pub const fn new() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// Creates a complex number from its real and imaginary parts.
    #[inline]
    pub const fn from_parts(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns the real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Computes the modulus.
    #[inline]
    pub fn modulus(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Computes the square of the modulus.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the argument in (-pi, pi].
    #[inline]
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the complex conjugate.
    #[inline]
    pub const fn conjugate(&self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// Returns true if the two values are closer than tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Complex, tolerance: f64) -> bool {
        let dr = self.re - other.re;
        let di = self.im - other.im;
        (dr * dr + di * di).sqrt() <= tolerance
    }

    /// Principal-branch square root.
    ///
    /// Half-angle form: for m*e^(i*theta) with theta in (-pi, pi], the
    /// root is sqrt(m)*e^(i*theta/2). The branch cut lies along the
    /// negative real axis.
    pub fn sqrt(self) -> Complex {
        let m = self.modulus().sqrt();
        let half = self.arg() * 0.5;
        Complex {
            re: m * half.cos(),
            im: m * half.sin(),
        }
    }
}

// Operator implementations

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Complex) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, other: Complex) {
        self.re -= other.re;
        self.im -= other.im;
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, scalar: f64) -> Complex {
        Complex {
            re: self.re * scalar,
            im: self.im * scalar,
        }
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    #[inline]
    fn mul(self, value: Complex) -> Complex {
        value * self
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.re *= scalar;
        self.im *= scalar;
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, scalar: f64) -> Complex {
        Complex {
            re: self.re / scalar,
            im: self.im / scalar,
        }
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(value: f64) -> Self {
        Complex {
            re: value,
            im: 0.0,
        }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from(parts: (f64, f64)) -> Self {
        Complex {
            re: parts.0,
            im: parts.1,
        }
    }
}

impl DescartesOps for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::new()
    }

    #[inline]
    fn sqrt(self) -> Self {
        Complex::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_new() {
        let z = Complex::new();
        assert_eq!(z.re(), 0.0);
        assert_eq!(z.im(), 0.0);
    }

    #[test]
    fn test_complex_from_parts() {
        let z = Complex::from_parts(1.0, -2.0);
        assert_eq!(z.re(), 1.0);
        assert_eq!(z.im(), -2.0);
    }

    #[test]
    fn test_complex_modulus() {
        let z = Complex::from_parts(3.0, 4.0);
        assert!((z.modulus() - 5.0).abs() < 1e-12);
        assert_eq!(z.square_modulus(), 25.0);
    }

    #[test]
    fn test_complex_mul() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let a = Complex::from_parts(1.0, 2.0);
        let b = Complex::from_parts(3.0, 4.0);
        let c = a * b;
        assert!((c.re() + 5.0).abs() < 1e-12);
        assert!((c.im() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_mul_scalar() {
        let z = Complex::from_parts(1.0, -2.0) * 3.0;
        assert_eq!(z, Complex::from_parts(3.0, -6.0));
        let w = 3.0 * Complex::from_parts(1.0, -2.0);
        assert_eq!(w, z);
    }

    #[test]
    fn test_complex_div_scalar() {
        let z = Complex::from_parts(4.0, -6.0) / 2.0;
        assert_eq!(z, Complex::from_parts(2.0, -3.0));
    }

    #[test]
    fn test_complex_sqrt_positive_real() {
        let z = Complex::from_parts(4.0, 0.0).sqrt();
        assert!((z.re() - 2.0).abs() < 1e-12);
        assert!(z.im().abs() < 1e-12);
    }

    #[test]
    fn test_complex_sqrt_negative_real() {
        // Principal branch: sqrt(-1) = i
        let z = Complex::from_parts(-1.0, 0.0).sqrt();
        assert!(z.re().abs() < 1e-12);
        assert!((z.im() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_sqrt_round_trip() {
        let z = Complex::from_parts(-3.0, 7.0);
        let r = z.sqrt();
        let back = r * r;
        assert!(back.is_equal(&z, 1e-10));
    }

    #[test]
    fn test_complex_conjugate() {
        let z = Complex::from_parts(1.0, 2.0).conjugate();
        assert_eq!(z, Complex::from_parts(1.0, -2.0));
    }

    #[test]
    fn test_complex_operators() {
        let a = Complex::from_parts(1.0, 2.0);
        let b = Complex::from_parts(3.0, -1.0);
        assert_eq!(a + b, Complex::from_parts(4.0, 1.0));
        assert_eq!(a - b, Complex::from_parts(-2.0, 3.0));
        assert_eq!(-a, Complex::from_parts(-1.0, -2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Complex::from_parts(4.0, 1.0));
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, Complex::from_parts(2.0, 4.0));
    }

    #[test]
    fn test_complex_scalar_lift() {
        let z: Complex = 5.0.into();
        assert_eq!(z, Complex::from_parts(5.0, 0.0));
        let w: Complex = (1.0, 2.0).into();
        assert_eq!(w, Complex::from_parts(1.0, 2.0));
    }

    #[test]
    fn test_complex_arg() {
        let z = Complex::from_parts(0.0, 1.0);
        assert!((z.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
