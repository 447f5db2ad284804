//! 2D simplex noise over Perlin's reference permutation.
//!
//! Follows Stefan Gustavson's reference formulation, so results match other
//! implementations that use the same permutation and gradient order.

use crate::math::lattice_index;
use crate::noise::GRADIENT;
use crate::noise::permutation::{PERMUTATION_TABLE, PermutationTable};

#[allow(clippy::unreadable_literal)]
const SQRT_3: f64 = 1.7320508075688772;
/// Skewing factor for 2D simplex: `0.5 * (sqrt(3) - 1)`
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Squared radius of a corner's influence. Beyond it the corner contributes nothing.
const FALLOFF_RADIUS_SQ: f64 = 0.5;
/// Empirical scale bringing the summed contributions into `[-1, 1]` for this gradient set.
const OUTPUT_SCALE: f64 = 70.0;

/// 2D simplex noise sampler.
///
/// Stateless apart from a shared reference to the immutable lattice hash, so it is
/// `Copy` and safe to call from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct SimplexNoise {
    table: &'static PermutationTable,
}

impl SimplexNoise {
    /// Create a sampler over [`PERMUTATION_TABLE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: &PERMUTATION_TABLE,
        }
    }

    /// Dot product of a gradient's first two components with the corner offset.
    #[inline]
    fn dot(g: &[i32; 3], x: f64, y: f64) -> f64 {
        f64::from(g[0]) * x + f64::from(g[1]) * y
    }

    /// Compute corner noise contribution for a simplex vertex.
    #[inline]
    fn corner_noise(index: usize, x: f64, y: f64) -> f64 {
        let t0 = FALLOFF_RADIUS_SQ - x * x - y * y;
        if t0 < 0.0 {
            0.0
        } else {
            let t0 = t0 * t0;
            t0 * t0 * Self::dot(&GRADIENT[index], x, y)
        }
    }

    /// Sample 2D simplex noise at the given coordinates.
    ///
    /// Returns a value in `[-1, 1]`. Identical inputs always give bit-identical
    /// outputs.
    ///
    /// Any finite coordinate is accepted; lattice cells are kept in `f64` so
    /// hashing stays exact far beyond the `i32` range. NaN or infinite input
    /// yields an unspecified value; it is not checked.
    #[must_use]
    pub fn sample(&self, xin: f64, yin: f64) -> f64 {
        let s = (xin + yin) * F2;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let t = (i + j) * G2;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);

        // Lower triangle when strictly below the diagonal; ties take the upper one.
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = lattice_index(i);
        let jj = lattice_index(j);
        let i1 = usize::from(i1);
        let j1 = usize::from(j1);
        let p = self.table;
        let gi0 = p.perm_mod12(ii + p.perm(jj));
        let gi1 = p.perm_mod12(ii + i1 + p.perm(jj + j1));
        let gi2 = p.perm_mod12(ii + 1 + p.perm(jj + 1));

        let n0 = Self::corner_noise(gi0, x0, y0);
        let n1 = Self::corner_noise(gi1, x1, y1);
        let n2 = Self::corner_noise(gi2, x2, y2);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }

    /// Sample 1D simplex noise: the 2D field along `y = 0`.
    #[inline]
    #[must_use]
    pub fn sample_1d(&self, x: f64) -> f64 {
        self.sample(x, 0.0)
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn origin_is_exactly_zero() {
        assert_eq!(SimplexNoise::new().sample(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_simplex_noise_deterministic() {
        let noise1 = SimplexNoise::new();
        let noise2 = SimplexNoise::default();

        for i in 0..10 {
            let x = f64::from(i) * 13.7;
            let y = f64::from(i) * 7.3;
            assert_eq!(
                noise1.sample(x, y).to_bits(),
                noise2.sample(x, y).to_bits(),
                "({x}, {y})"
            );
        }
    }

    #[test]
    fn one_dimensional_form_is_the_y_zero_slice() {
        let noise = SimplexNoise::new();
        for i in -50..50 {
            let x = f64::from(i) * 0.37;
            assert_eq!(noise.sample_1d(x).to_bits(), noise.sample(x, 0.0).to_bits());
        }
    }

    #[test]
    fn test_simplex_2d_spatial_variation() {
        let noise = SimplexNoise::new();

        let values: Vec<f64> = (0..20)
            .map(|i| noise.sample(f64::from(i) * 50.3, f64::from(i) * 30.1))
            .collect();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.01, "2D simplex should have spatial variation");
    }

    #[test]
    fn diagonal_points_use_the_upper_triangle() {
        // On the cell diagonal x0 == y0, which must resolve to corner offset (0, 1).
        let v = SimplexNoise::new().sample(1.0, 1.0);
        assert!((v - -0.440_267_719_075_499_44).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn corner_outside_falloff_contributes_nothing() {
        assert!(SimplexNoise::corner_noise(0, 0.6, 0.6).abs() < f64::EPSILON);
        assert!(SimplexNoise::corner_noise(0, 0.1, 0.1) > 0.0);
    }

    #[test]
    fn coordinates_beyond_i32_hash_the_right_cell() {
        let noise = SimplexNoise::new();
        for (x, y, expected) in [
            (3e9, 0.0, 0.305_705_067_894_365_2),
            (-3e9, 0.0, -0.368_275_167_705_231_2),
            (-3e9, 1.3, 0.601_849_459_107_668_3),
            (-1e12, 0.0, 0.178_198_737_086_909_67),
        ] {
            let v = noise.sample(x, y);
            assert!((v - expected).abs() < 1e-12, "sample({x}, {y}) = {v}, expected {expected}");
        }
    }

    #[test]
    fn non_finite_input_does_not_panic() {
        let noise = SimplexNoise::new();
        for (x, y) in [
            (f64::NAN, 0.0),
            (f64::INFINITY, 1.0),
            (f64::NEG_INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            let _ = noise.sample(x, y);
        }
    }

    #[test]
    fn skew_constants_match_geometry() {
        assert!((F2 - 0.5 * (3f64.sqrt() - 1.0)).abs() < 1e-15);
        assert!((G2 - (3.0 - 3f64.sqrt()) / 6.0).abs() < 1e-15);
    }
}
