//! Small numeric helpers shared by the noise samplers.

/// Permutation period; lattice coordinates wrap at this size.
const LATTICE_PERIOD: f64 = 256.0;

/// Wrap an integral lattice coordinate into `0..256` for table lookup.
///
/// Works on the `f64` cell coordinate directly, so it is exact for every finite
/// value, including ones far outside the `i32` range. `cell` is expected to be
/// the result of `f64::floor`. NaN and infinities map to `0`.
#[inline]
#[must_use]
pub fn lattice_index(cell: f64) -> usize {
    cell.rem_euclid(LATTICE_PERIOD) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cells_match_bit_masking() {
        for cell in -600..600 {
            assert_eq!(lattice_index(f64::from(cell)), (cell & 0xFF) as usize, "{cell}");
        }
    }

    #[test]
    fn cells_beyond_i32_wrap_exactly() {
        assert_eq!(lattice_index(3e9), (3_000_000_000_i64 & 0xFF) as usize);
        assert_eq!(lattice_index(-3e9), (-3_000_000_000_i64 & 0xFF) as usize);
        assert_eq!(lattice_index(-1e12), (-1_000_000_000_000_i64 & 0xFF) as usize);
        assert_eq!(lattice_index(2f64.powi(60) + 2f64.powi(10)), 0);
    }

    #[test]
    fn non_finite_cells_map_to_zero() {
        assert_eq!(lattice_index(f64::NAN), 0);
        assert_eq!(lattice_index(f64::INFINITY), 0);
        assert_eq!(lattice_index(f64::NEG_INFINITY), 0);
        assert_eq!(lattice_index(-0.0), 0);
    }
}
