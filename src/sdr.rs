//! SDR buffer helpers.
//!
//! Encodings are plain 0/1-valued `u8` buffers owned by the caller; these
//! free functions cover the handful of measurements downstream consumers
//! keep reaching for — density and bitwise overlap.

use crate::{Error, Result};

/// Number of "on" bits in an SDR.
pub fn popcount(sdr: &[u8]) -> usize {
    sdr.iter().filter(|&&bit| bit != 0).count()
}

/// Indices of "on" bits, ascending.
pub fn active_indices(sdr: &[u8]) -> Vec<usize> {
    sdr.iter()
        .enumerate()
        .filter(|(_, &bit)| bit != 0)
        .map(|(i, _)| i)
        .collect()
}

/// Number of positions that are "on" in both SDRs.
pub fn overlap(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(Error::BufferSize {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(a.iter().zip(b).filter(|(&x, &y)| x != 0 && y != 0).count())
}

/// Overlap normalized by the density of `a` (0.0 — 1.0).
///
/// Matches the classic evaluation metric `|a ∧ b| / |a|`; returns 0.0 when
/// `a` has no active bits.
pub fn overlap_ratio(a: &[u8], b: &[u8]) -> Result<f64> {
    let shared = overlap(a, b)?;
    let active = popcount(a);
    if active == 0 {
        return Ok(0.0);
    }
    Ok(shared as f64 / active as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popcount_and_indices() {
        let sdr = [0u8, 1, 0, 1, 1, 0];
        assert_eq!(popcount(&sdr), 3);
        assert_eq!(active_indices(&sdr), vec![1, 3, 4]);
        assert_eq!(popcount(&[]), 0);
    }

    #[test]
    fn test_overlap() {
        let a = [1u8, 1, 0, 1];
        let b = [1u8, 0, 1, 1];
        assert_eq!(overlap(&a, &b).unwrap(), 2);
        assert_eq!(overlap_ratio(&a, &b).unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_overlap_ratio_of_empty_is_zero() {
        let empty = [0u8; 4];
        let b = [1u8; 4];
        assert_eq!(overlap_ratio(&empty, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(overlap(&[1u8, 0], &[1u8, 0, 1]).is_err());
    }
}
