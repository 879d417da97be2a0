use serde::Serialize;
use serde_json::Value;

use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::io::geojson::ring_to_feature;

use super::ExcavationParameters;

/// Thresholds derived from the declared target surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Requirements {
    /// Surface the basin serves, in m².
    pub target_surface: f64,
    /// Minimum rim area, in m².
    pub required_surface: f64,
    /// Minimum excavated volume, in m³.
    pub required_volume: f64,
}

impl Requirements {
    /// Scales the target surface by the configured ratios.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the target is negative or not finite.
    pub fn from_target(target_surface: f64, surface_ratio: f64, volume_ratio: f64) -> Result<Self> {
        if !target_surface.is_finite() || target_surface < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "target surface {target_surface} must be non-negative and finite"
            ))
            .into());
        }
        Ok(Self {
            target_surface,
            required_surface: target_surface * surface_ratio,
            required_volume: target_surface * volume_ratio,
        })
    }
}

/// Everything derived from one traced rim.
///
/// Lengths are in meters, areas in m² and volumes in m³.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcavationReport {
    pub parameters: ExcavationParameters,
    pub offset_distance: f64,
    /// Rim ring in lon/lat, counter-clockwise.
    pub top_ring_geo: Ring,
    pub top_ring_planar: Ring,
    pub bottom_ring_planar: Ring,
    pub bottom_ring_geo: Ring,
    /// Length of every rim edge in the planar system, closing edge last.
    pub perimeter_segments: Vec<f64>,
    pub total_perimeter: f64,
    pub top_area: f64,
    pub bottom_area: f64,
    pub volume: f64,
    pub requirements: Requirements,
    pub surface_sufficient: bool,
    pub volume_sufficient: bool,
}

impl ExcavationReport {
    /// Rim outline as a GeoJSON feature.
    #[must_use]
    pub fn top_feature(&self) -> Value {
        ring_to_feature(&self.top_ring_geo)
    }

    /// Bottom outline as a GeoJSON feature, for drawing as a dashed overlay.
    #[must_use]
    pub fn bottom_feature(&self) -> Value {
        ring_to_feature(&self.bottom_ring_geo)
    }

    /// Formats the report as one results-table row: depth, angle, required
    /// surface, rim area, required volume, volume, and the perimeter sum.
    #[must_use]
    pub fn summary_cells(&self) -> [String; 7] {
        let lengths = self
            .perimeter_segments
            .iter()
            .map(|l| format!("{l:.1} m"))
            .collect::<Vec<_>>()
            .join(" + ");
        [
            format!("{} cm", self.parameters.depth_centimeters()),
            format!("{}°", self.parameters.slope_angle_degrees()),
            format!("{:.1} m²", self.requirements.required_surface),
            format!("{:.1} m²", self.top_area),
            format!("{:.1} m³", self.requirements.required_volume),
            format!("{:.1} m³", self.volume),
            format!("{lengths} = {:.1} m", self.total_perimeter),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn requirements_scale_target() {
        let req = Requirements::from_target(1000.0, 0.08, 0.033).unwrap();
        assert!((req.required_surface - 80.0).abs() < 1e-9);
        assert!((req.required_volume - 33.0).abs() < 1e-9);
    }

    #[test]
    fn negative_target_is_rejected() {
        assert!(Requirements::from_target(-5.0, 0.08, 0.033).is_err());
        assert!(Requirements::from_target(f64::NAN, 0.08, 0.033).is_err());
    }
}
