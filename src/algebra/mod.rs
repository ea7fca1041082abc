//! Circle algebra package.
//!
//! Foundational value types for the gasket kernel: complex numbers,
//! circles in bend / bend-center form, and the generic numeric interface
//! the Descartes solver is written against.

mod circle;
mod complex;
mod ops;

pub use circle::Circle;
pub use complex::Complex;
pub use ops::DescartesOps;
