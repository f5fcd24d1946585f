//! GPS reading → SDR encoder.
//!
//! Positions are projected to spherical-Mercator meters and quantized to a
//! `scale`-meter grid; speed stretches the neighborhood so that an entity
//! moving fast lights up a wider (and therefore more tolerant) region of
//! cell space than one standing still.
//!
//! # Calibration
//!
//! The projection and the radius rule are pinned by literal oracles rather
//! than derived cleanly; see the unit tests. In particular the radius rule
//! floors the traversed distance to whole cells *before* halving, which is
//! why (speed 25 m/s, timestep 62 s, scale 30 m) gives radius 38 and not 39.

use serde::{Deserialize, Serialize};

use crate::coordinate::{CoordinateEncoder, GridCoordinate};
use crate::encoder::Encoder;
use crate::{Error, Result, DEFAULT_N, DEFAULT_W};

/// Spherical Mercator earth radius in meters (the EPSG:3857 sphere).
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Neighborhood stretch factor, so consecutive readings of a moving entity
/// still overlap instead of tiling edge to edge.
const TRAVEL_OVERLAP: f64 = 1.5;

/// One GPS reading: position in degrees, speed in meters per second.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoSample {
    pub longitude: f64,
    pub latitude: f64,
    pub speed: f64,
}

impl GeoSample {
    pub fn new(longitude: f64, latitude: f64, speed: f64) -> Self {
        Self {
            longitude,
            latitude,
            speed,
        }
    }
}

/// Geospatial coordinate encoder.
///
/// Configuration is fixed at construction; the encoder holds no mutable
/// state and may be shared across threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeospatialCoordinateEncoder {
    scale: f64,
    timestep: f64,
    cells: CoordinateEncoder,
}

impl GeospatialCoordinateEncoder {
    /// Create an encoder with the default SDR width.
    ///
    /// `scale` is meters per grid cell, `timestep` is seconds between
    /// consecutive readings.
    pub fn new(scale: f64, timestep: f64) -> Result<Self> {
        Self::with_size(scale, timestep, DEFAULT_N, DEFAULT_W)
    }

    /// Create an encoder with explicit `n` total bits and `w` active bits.
    pub fn with_size(scale: f64, timestep: f64, n: usize, w: usize) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "scale must be a positive number of meters, got {}",
                scale
            )));
        }
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "timestep must be a positive number of seconds, got {}",
                timestep
            )));
        }
        Ok(Self {
            scale,
            timestep,
            cells: CoordinateEncoder::new(n, w)?,
        })
    }

    /// Meters per grid cell.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Seconds per encoding step.
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Quantize a position to its grid cell.
    ///
    /// Spherical Mercator: `x = R·λ`, `y = R·ln(tan(π/4 + φ/2))`, then
    /// divide by `scale` and truncate toward zero. The origin maps to
    /// `(0, 0)` at any scale.
    pub fn coordinate_for_position(&self, longitude: f64, latitude: f64) -> GridCoordinate {
        let x_m = EARTH_RADIUS_M * longitude.to_radians();
        let y_m = EARTH_RADIUS_M
            * (std::f64::consts::FRAC_PI_4 + latitude.to_radians() / 2.0)
                .tan()
                .ln();
        GridCoordinate::new((x_m / self.scale) as i64, (y_m / self.scale) as i64)
    }

    /// Neighborhood radius, in cells, for a reading at `speed` m/s.
    ///
    /// Whole cells traversed in one timestep, halved (the radius sits on
    /// the midpoint of the travel), stretched by the overlap factor, and
    /// rounded half away from zero. Never drops below [`min_radius`]
    /// (a standing-still reading still needs enough cells to fill `w`
    /// bits).
    ///
    /// [`min_radius`]: Self::min_radius
    pub fn radius_for_speed(&self, speed: f64) -> u32 {
        let cells_per_step = (speed * self.timestep / self.scale).floor();
        let travel = (cells_per_step / 2.0 * TRAVEL_OVERLAP).round();
        (travel as u32).max(self.min_radius())
    }

    /// Resolution floor on the radius: `ceil((√w − 1) / 2)`, the smallest
    /// radius whose `(2r+1)²` neighborhood holds at least `w` cells.
    pub fn min_radius(&self) -> u32 {
        (((self.cells.w() as f64).sqrt() - 1.0) / 2.0).ceil() as u32
    }
}

impl Encoder for GeospatialCoordinateEncoder {
    type Input = GeoSample;

    fn width(&self) -> usize {
        self.cells.width()
    }

    fn encode_into(&self, sample: &GeoSample, output: &mut [u8]) -> Result<()> {
        if output.len() != self.width() {
            return Err(Error::BufferSize {
                expected: self.width(),
                got: output.len(),
            });
        }
        if !sample.longitude.is_finite() {
            return Err(Error::NonFiniteInput("longitude"));
        }
        if !sample.latitude.is_finite() {
            return Err(Error::NonFiniteInput("latitude"));
        }
        if !sample.speed.is_finite() {
            return Err(Error::NonFiniteInput("speed"));
        }
        if sample.speed < 0.0 {
            return Err(Error::NegativeSpeed(sample.speed));
        }

        let center = self.coordinate_for_position(sample.longitude, sample.latitude);
        let radius = self.radius_for_speed(sample.speed);
        self.cells.encode_into(&(center, radius), output)
    }
}
