//! apollon: Pure Rust Apollonian gasket kernel
//!
//! Generates fractal packings of mutually tangent circles by repeated
//! application of the Descartes Circle Theorem to a seed quadruple of
//! mutually tangent circles, pruning once circles fall below a radius
//! threshold.

pub mod algebra;
pub mod descartes;
pub mod gasket;
pub mod kissing;
pub mod precision;
pub mod seed;
pub mod tree;

// Re-exports for convenience
pub use algebra::{Circle, Complex, DescartesOps};
pub use descartes::{descartes, other};
pub use gasket::{apollonian, apollonian_gasket, Gasket};
pub use kissing::{kissing_sets, KissingSet};
pub use seed::initial_config;
pub use tree::{apollonian_trees, GasketTree};

/// Tolerance for geometric comparisons
pub const TOLERANCE: f64 = 1e-9;

/// Result type for gasket operations
pub type Result<T> = std::result::Result<T, GasketError>;

#[derive(Debug, thiserror::Error)]
pub enum GasketError {
    #[error("Invalid arity: {0}")]
    InvalidArity(String),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),
}
