//! Grid-cell-space SDR encoding.
//!
//! The encoder here works entirely in integer cell space: given a center
//! cell and a neighborhood radius, it enumerates the square `(2r+1)²`
//! neighborhood, gives every cell a hash-derived selection order, and keeps
//! the top-`w` cells. Each winner contributes one bit to the output buffer.
//!
//! Because the order and bit of a cell depend only on the cell itself (see
//! [`crate::hash`]), two overlapping neighborhoods agree on the scores of
//! their shared cells — which is what makes nearby centers produce
//! overlapping SDRs.

use serde::{Deserialize, Serialize};

use crate::encoder::Encoder;
use crate::hash::cell_score;
use crate::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A quantized 2D grid cell index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i64,
    pub y: i64,
}

impl GridCoordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to another cell.
    pub fn chebyshev(&self, other: &GridCoordinate) -> u64 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }
}

/// A scored neighborhood cell, ready for the top-`w` cut.
struct Candidate {
    order: u64,
    distance: u64,
    x: i64,
    y: i64,
    bit: usize,
}

/// SDR encoder over (center cell, radius) pairs.
///
/// This is the layer [`GeospatialCoordinateEncoder`] builds on, but it is
/// an [`Encoder`] in its own right: any input that quantizes to an integer
/// cell plus a neighborhood radius can be encoded through it.
///
/// [`GeospatialCoordinateEncoder`]: crate::GeospatialCoordinateEncoder
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoordinateEncoder {
    n: usize,
    w: usize,
}

impl CoordinateEncoder {
    /// Create an encoder with `n` total bits and `w` active bits.
    pub fn new(n: usize, w: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidConfig("n must be positive".into()));
        }
        if w == 0 || w > n {
            return Err(Error::InvalidConfig(format!(
                "w must be in 1..=n (w={}, n={})",
                w, n
            )));
        }
        Ok(Self { n, w })
    }

    /// Number of active bits per encoding.
    pub fn w(&self) -> usize {
        self.w
    }

    /// Score every cell in the square neighborhood of `center`.
    fn score_neighborhood(&self, center: GridCoordinate, radius: u32) -> Vec<Candidate> {
        let r = radius as i64;
        let cells: Vec<(i64, i64)> = (center.x - r..=center.x + r)
            .flat_map(|x| (center.y - r..=center.y + r).map(move |y| (x, y)))
            .collect();

        let score = |&(x, y): &(i64, i64)| -> Candidate {
            let (order, bit) = cell_score(x, y, self.n);
            Candidate {
                order,
                distance: center.chebyshev(&GridCoordinate::new(x, y)),
                x,
                y,
                bit,
            }
        };

        #[cfg(feature = "parallel")]
        {
            cells.par_iter().map(score).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            cells.iter().map(score).collect()
        }
    }
}

impl Encoder for CoordinateEncoder {
    type Input = (GridCoordinate, u32);

    fn width(&self) -> usize {
        self.n
    }

    /// Write the SDR for `(center, radius)` into `output`.
    ///
    /// Winners are the `w` cells with the highest hash order; ties go to
    /// the cell nearer the center, then to the smaller `(x, y)`. Cells
    /// whose bit is already taken by a higher-ranked winner are skipped,
    /// so the encoding carries exactly `w` distinct bits whenever the
    /// neighborhood can supply them. Undersized neighborhoods (tiny `n`)
    /// saturate deterministically with every distinct bit found.
    fn encode_into(&self, &(center, radius): &Self::Input, output: &mut [u8]) -> Result<()> {
        if output.len() != self.n {
            return Err(Error::BufferSize {
                expected: self.n,
                got: output.len(),
            });
        }

        let mut candidates = self.score_neighborhood(center, radius);
        candidates.sort_unstable_by(|a, b| {
            b.order
                .cmp(&a.order)
                .then(a.distance.cmp(&b.distance))
                .then(a.x.cmp(&b.x))
                .then(a.y.cmp(&b.y))
        });

        output.fill(0);
        let mut chosen = 0usize;
        for candidate in &candidates {
            if output[candidate.bit] == 0 {
                output[candidate.bit] = 1;
                chosen += 1;
                if chosen == self.w {
                    break;
                }
            }
        }
        Ok(())
    }
}
