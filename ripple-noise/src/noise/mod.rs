//! Noise generation primitives.
//!
//! - [`PermutationTable`] - Fixed lattice hash built from Perlin's reference permutation
//! - [`SimplexNoise`] - 2D simplex noise (1D as the `y = 0` slice)

mod permutation;
mod simplex_noise;

pub use permutation::{BASE_PERMUTATION, PERMUTATION_TABLE, PermutationTable};
pub use simplex_noise::SimplexNoise;

/// The 12 edge-midpoint gradients of a cube, in the canonical simplex-noise order.
///
/// 2D sampling only reads the first two components.
pub const GRADIENT: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];
