use serde::Serialize;

use crate::error::{OperationError, Result};

/// Slope and depth of an excavation, in degrees and meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExcavationParameters {
    slope_angle_degrees: f64,
    depth: f64,
}

impl ExcavationParameters {
    /// Creates parameters from a slope angle in degrees and a depth in meters.
    ///
    /// # Errors
    ///
    /// - `OperationError::DegenerateAngle` unless `0 < angle < 90`
    /// - `OperationError::InvalidDepth` unless the depth is positive and finite
    pub fn new(slope_angle_degrees: f64, depth: f64) -> Result<Self> {
        if !(slope_angle_degrees > 0.0 && slope_angle_degrees < 90.0) {
            return Err(OperationError::DegenerateAngle(slope_angle_degrees).into());
        }
        if !(depth.is_finite() && depth > 0.0) {
            return Err(OperationError::InvalidDepth(depth).into());
        }
        Ok(Self {
            slope_angle_degrees,
            depth,
        })
    }

    /// Creates parameters from user input, where depth is given in centimeters.
    ///
    /// # Errors
    ///
    /// See [`ExcavationParameters::new`].
    pub fn from_centimeters(slope_angle_degrees: f64, depth_cm: f64) -> Result<Self> {
        Self::new(slope_angle_degrees, depth_cm / 100.0)
    }

    #[must_use]
    pub fn slope_angle_degrees(&self) -> f64 {
        self.slope_angle_degrees
    }

    /// Depth in meters.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Depth in centimeters, rounded to 1e-9 cm so 7 cm reads back as `7`.
    #[must_use]
    pub fn depth_centimeters(&self) -> f64 {
        (self.depth * 1e11).round() / 1e9
    }

    /// Horizontal run of the slope: `depth / tan(angle)`.
    #[must_use]
    pub fn offset_distance(&self) -> f64 {
        self.depth / self.slope_angle_degrees.to_radians().tan()
    }
}
