use crate::error::{OperationError, Result};

/// Volume of a frustum with parallel cross-sections `area_top` and
/// `area_bottom` separated by `height`:
/// `h / 3 * (A1 + A2 + sqrt(A1 * A2))`.
///
/// Reduces to `A * h` for equal areas and `A * h / 3` for a cone.
#[must_use]
pub fn frustum_volume(area_top: f64, area_bottom: f64, height: f64) -> f64 {
    height / 3.0 * (area_top + area_bottom + (area_top * area_bottom).sqrt())
}

/// Estimates the volume between two roughly similar polygons.
///
/// The excavation between the rim and the bottom is a prismatoid; the
/// conical frustum formula is used as its approximation.
pub struct FrustumVolume {
    area_top: f64,
    area_bottom: f64,
    height: f64,
}

impl FrustumVolume {
    /// Creates a new `FrustumVolume` query.
    #[must_use]
    pub fn new(area_top: f64, area_bottom: f64, height: f64) -> Self {
        Self {
            area_top,
            area_bottom,
            height,
        }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if an area or the height is
    /// negative or not finite.
    pub fn execute(&self) -> Result<f64> {
        for (name, value) in [
            ("top area", self.area_top),
            ("bottom area", self.area_bottom),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} = {value} must be non-negative and finite"
                ))
                .into());
            }
        }
        Ok(frustum_volume(self.area_top, self.area_bottom, self.height))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equal_areas_make_a_prism() {
        for (area, h) in [(100.0, 2.0), (36.5, 0.4), (1e4, 1.25)] {
            assert_relative_eq!(frustum_volume(area, area, h), area * h, max_relative = 1e-12);
        }
    }

    #[test]
    fn square_basin() {
        // 10 m rim, 6 m bottom, 2 m deep: 2/3 * (100 + 36 + 60).
        let volume = FrustumVolume::new(100.0, 36.0, 2.0).execute().unwrap();
        assert_relative_eq!(volume, 392.0 / 3.0, max_relative = 1e-12);
        assert!((volume - 130.67).abs() < 0.01);
    }

    #[test]
    fn zero_bottom_is_a_pyramid() {
        let volume = FrustumVolume::new(90.0, 0.0, 3.0).execute().unwrap();
        assert_relative_eq!(volume, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn negative_area_is_rejected() {
        assert!(FrustumVolume::new(-1.0, 4.0, 1.0).execute().is_err());
        assert!(FrustumVolume::new(1.0, 4.0, f64::NAN).execute().is_err());
    }
}
