//! The encoder capability seam.
//!
//! The wider framework this crate plugs into knows encoders only through
//! two operations: how wide their output is, and how to write one encoding
//! into a caller-owned buffer. That contract is a single narrow trait here,
//! not a class hierarchy — any encoder type is one polymorphic variant
//! among many.

use crate::Result;

/// A stateless transform from some input type to a fixed-width SDR.
///
/// Implementations must be deterministic (identical input and configuration
/// always produce bit-identical output) and must not mutate any internal
/// state, so `&self` methods are safe to call concurrently.
pub trait Encoder {
    /// The input value this encoder understands.
    type Input;

    /// Total output width `n` in bits.
    fn width(&self) -> usize;

    /// Encode `input` into `output`, a 0/1-valued buffer of exactly
    /// [`width()`](Self::width) elements.
    ///
    /// The buffer is overwritten in full: bits not selected by this
    /// encoding are cleared. A wrong-sized buffer fails with
    /// [`Error::BufferSize`](crate::Error::BufferSize) before any write.
    fn encode_into(&self, input: &Self::Input, output: &mut [u8]) -> Result<()>;

    /// Encode into a freshly allocated buffer.
    fn encode(&self, input: &Self::Input) -> Result<Vec<u8>> {
        let mut output = vec![0u8; self.width()];
        self.encode_into(input, &mut output)?;
        Ok(output)
    }
}
