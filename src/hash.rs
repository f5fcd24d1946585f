//! Versioned deterministic cell hashing.
//!
//! Every grid cell is mapped to two pseudo-random quantities: a selection
//! *order* (which decides whether the cell wins a slot in the top-`w` cut)
//! and an output *bit* (where the cell lands in the SDR). Both come from a
//! single SHA-256 digest over a domain tag and the little-endian cell
//! coordinates, so the mapping is stable across runs, platforms, and
//! implementations — a requirement for any SDR that gets persisted or
//! compared across processes.

use sha2::{Digest, Sha256};

/// Domain tag mixed into every cell digest.
///
/// This is the hash version handle: any change to the digest layout must
/// bump the suffix, and encodings produced under different tags are not
/// comparable.
pub const CELL_HASH_TAG: &[u8] = b"geosdr/cell/v1";

/// SHA-256 digest of a grid cell.
fn cell_digest(x: i64, y: i64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(CELL_HASH_TAG);
    hasher.update(x.to_le_bytes());
    hasher.update(y.to_le_bytes());
    hasher.finalize().into()
}

/// Selection order and output bit of a cell, from a single digest.
///
/// Digest bytes 0..8 little-endian are the order; bytes 8..16
/// little-endian, reduced mod `n`, are the bit. The two halves are
/// independent, so winning the top-`w` cut and bit placement are
/// uncorrelated. This is the only place the digest layout is interpreted.
pub fn cell_score(x: i64, y: i64, n: usize) -> (u64, usize) {
    let digest = cell_digest(x, y);
    let order = u64::from_le_bytes(digest[0..8].try_into().unwrap());
    let raw_bit = u64::from_le_bytes(digest[8..16].try_into().unwrap());
    (order, (raw_bit % n as u64) as usize)
}

/// Selection priority of a cell; higher orders win the top-`w` cut.
pub fn cell_order(x: i64, y: i64) -> u64 {
    // The bit half collapses at n = 1; only the order half is wanted here.
    cell_score(x, y, 1).0
}

/// Output bit of a cell within a width-`n` buffer.
pub fn cell_bit(x: i64, y: i64, n: usize) -> usize {
    cell_score(x, y, n).1
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pinned vectors for the v1 tag. If any of these move, the digest
    /// layout changed and CELL_HASH_TAG must be bumped.
    #[test]
    fn test_v1_regression_vectors() {
        let cases: &[(i64, i64, u64, usize, usize)] = &[
            // (x, y, order, bit mod 999, bit mod 1000)
            (0, 0, 2275286056372900441, 85, 901),
            (1, 0, 14598326654689615532, 226, 629),
            (0, 1, 9017435449450841217, 978, 660),
            (-1, -1, 3996513078914240956, 275, 621),
            (-453549, 150239, 2650626607692004494, 110, 444),
        ];
        for &(x, y, order, bit999, bit1000) in cases {
            assert_eq!(cell_order(x, y), order, "order for ({}, {})", x, y);
            assert_eq!(cell_bit(x, y, 999), bit999, "bit%999 for ({}, {})", x, y);
            assert_eq!(cell_bit(x, y, 1000), bit1000, "bit%1000 for ({}, {})", x, y);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(cell_score(42, -7, 999), cell_score(42, -7, 999));
    }

    #[test]
    fn test_neighbors_hash_apart() {
        // (x, y) and (y, x) must not collide: coordinates are positional
        // in the digest input, not a symmetric bag.
        assert_ne!(cell_order(3, 5), cell_order(5, 3));
        assert_ne!(cell_score(0, 0, 999), cell_score(0, 1, 999));
    }

    #[test]
    fn test_accessors_agree_with_score() {
        let (order, bit) = cell_score(-453549, 150239, 999);
        assert_eq!(cell_order(-453549, 150239), order);
        assert_eq!(cell_bit(-453549, 150239, 999), bit);
    }

    #[test]
    fn test_bit_in_range() {
        for x in -20..20i64 {
            for y in -20..20i64 {
                assert!(cell_bit(x, y, 97) < 97);
            }
        }
    }
}
