//! # geosdr
//!
//! Geospatial coordinate encoder: (longitude, latitude, speed) → sparse
//! distributed representation (SDR).
//!
//! An SDR is a fixed-width binary vector with a small fixed number of "on"
//! bits, where bit overlap between two vectors encodes similarity of their
//! source inputs. This crate maps GPS readings onto an integer grid in
//! Mercator meters, picks a speed-dependent neighborhood of grid cells
//! around the reading, and hashes the winning cells to bit positions — so
//! nearby positions share most of their bits and distant positions share
//! almost none.
//!
//! ## Quick Start
//! ```
//! use geosdr::{Encoder, GeoSample, GeospatialCoordinateEncoder};
//!
//! // 30 m grid cells, one reading every 60 s
//! let encoder = GeospatialCoordinateEncoder::new(30.0, 60.0).unwrap();
//!
//! let sample = GeoSample::new(-122.229194, 37.486782, 2.5);
//! let sdr = encoder.encode(&sample).unwrap();
//! assert_eq!(sdr.len(), encoder.width());
//! ```
//!
//! ## Pipeline
//! ```text
//! (longitude, latitude) ──Mercator/scale──▶ GridCoordinate (x, y)
//! speed ──────────────────timestep/scale──▶ neighborhood radius
//! (center, radius) ──top-w hashed cells──▶ w "on" bits in [0, n)
//! ```
//!
//! Encoders are immutable after construction: every operation is a pure
//! function of the input and the fixed configuration, so a single encoder
//! may be shared across threads freely.

// === Core modules ===
pub mod coordinate;
pub mod encoder;
pub mod geospatial;
pub mod hash;
pub mod sdr;

// === Re-exports for convenience ===
pub use crate::coordinate::{CoordinateEncoder, GridCoordinate};
pub use crate::encoder::Encoder;
pub use crate::geospatial::{GeoSample, GeospatialCoordinateEncoder};

// === Error types ===

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("output buffer mismatch: expected {expected} elements, got {got}")]
    BufferSize { expected: usize, got: usize },

    #[error("invalid encoder configuration: {0}")]
    InvalidConfig(String),

    #[error("non-finite input: {0}")]
    NonFiniteInput(&'static str),

    #[error("negative speed: {0}")]
    NegativeSpeed(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

// === Constants ===

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default total SDR width in bits (`n`).
pub const DEFAULT_N: usize = 1000;

/// Default number of "on" bits per encoding (`w`).
pub const DEFAULT_W: usize = 21;
