//! Deterministic 2D simplex noise.
//!
//! The field is a pure function of its input coordinates: the permutation table is
//! a compile-time constant and sampling never mutates shared state, so a single
//! [`SimplexNoise`] can be shared freely across threads.
//!
//! ```
//! let n = ripple_noise::sample(1.25, -3.75);
//! assert!((-1.0..=1.0).contains(&n));
//! assert_eq!(ripple_noise::sample_1d(0.3), ripple_noise::sample(0.3, 0.0));
//! ```

pub mod math;
pub mod noise;

pub use noise::{PERMUTATION_TABLE, PermutationTable, SimplexNoise};

/// Shared sampler backed by [`PERMUTATION_TABLE`].
const SIMPLEX: SimplexNoise = SimplexNoise::new();

/// Sample 2D simplex noise at `(x, y)`.
///
/// Shorthand for [`SimplexNoise::sample`] on the shared table.
#[inline]
#[must_use]
pub fn sample(x: f64, y: f64) -> f64 {
    SIMPLEX.sample(x, y)
}

/// Sample 1D simplex noise at `x`, i.e. the 2D field along `y = 0`.
#[inline]
#[must_use]
pub fn sample_1d(x: f64) -> f64 {
    SIMPLEX.sample_1d(x)
}
