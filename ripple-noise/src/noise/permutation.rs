//! Lattice hash for simplex noise.
//!
//! Built once at compile time from Ken Perlin's reference permutation, so every
//! build and every run hashes lattice points identically.

/// Number of entries in the base permutation. Lattice coordinates wrap at this size.
const PERIOD: usize = 256;
/// Table length. Doubling the base permutation lets `perm[a + perm[b]]` skip a
/// second wrap, since `a, b <= 256` and `perm[b] <= 255`.
const TABLE_LEN: usize = PERIOD * 2;
/// Size of the gradient set indexed by `perm_mod12`.
const GRADIENT_COUNT: u8 = 12;

/// Perlin's published permutation of `0..=255`.
#[rustfmt::skip]
pub const BASE_PERMUTATION: [u8; PERIOD] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// The shared table used by every [`SimplexNoise`](super::SimplexNoise).
///
/// Evaluated at compile time, so it is fully built before any sampler can read it.
pub static PERMUTATION_TABLE: PermutationTable = PermutationTable::new();

/// Doubled permutation plus its gradient-index reduction.
///
/// Both halves of each table are identical: `perm[i] == perm[i + 256]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_LEN],
    perm_mod12: [u8; TABLE_LEN],
}

impl PermutationTable {
    /// Number of addressable entries in each table.
    pub const LEN: usize = TABLE_LEN;

    /// Build the table from [`BASE_PERMUTATION`].
    #[must_use]
    pub const fn new() -> Self {
        let mut perm = [0u8; TABLE_LEN];
        let mut perm_mod12 = [0u8; TABLE_LEN];

        let mut i = 0;
        while i < TABLE_LEN {
            perm[i] = BASE_PERMUTATION[i % PERIOD];
            perm_mod12[i] = perm[i] % GRADIENT_COUNT;
            i += 1;
        }

        Self { perm, perm_mod12 }
    }

    /// Hash value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 512`.
    #[inline]
    #[must_use]
    pub const fn perm(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Gradient index (`perm(index) % 12`) at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 512`.
    #[inline]
    #[must_use]
    pub const fn perm_mod12(&self, index: usize) -> usize {
        self.perm_mod12[index] as usize
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_permutation_covers_every_byte() {
        let mut seen = [false; PERIOD];
        for value in BASE_PERMUTATION {
            assert!(!seen[value as usize], "{value} appears twice");
            seen[value as usize] = true;
        }
    }

    #[test]
    fn halves_are_duplicated() {
        let table = &PERMUTATION_TABLE;
        for i in 0..PERIOD {
            assert_eq!(table.perm(i), table.perm(i + PERIOD), "perm[{i}]");
            assert_eq!(
                table.perm_mod12(i),
                table.perm_mod12(i + PERIOD),
                "perm_mod12[{i}]"
            );
        }
    }

    #[test]
    fn gradient_index_is_reduced_perm() {
        let table = PermutationTable::new();
        for i in 0..PermutationTable::LEN {
            assert_eq!(table.perm_mod12(i), table.perm(i) % 12);
            assert!(table.perm_mod12(i) < 12);
        }
    }

    #[test]
    fn starts_with_reference_values() {
        assert_eq!(PERMUTATION_TABLE.perm(0), 151);
        assert_eq!(PERMUTATION_TABLE.perm(255), 180);
        assert_eq!(PERMUTATION_TABLE.perm(256), 151);
        assert_eq!(PERMUTATION_TABLE.perm_mod12(0), 151 % 12);
    }

    #[test]
    fn runtime_and_static_tables_agree() {
        assert_eq!(PermutationTable::default(), PERMUTATION_TABLE);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn reading_past_the_table_panics() {
        let _ = PERMUTATION_TABLE.perm(std::hint::black_box(PermutationTable::LEN));
    }
}
