use tracing::{debug, info, warn};

use crate::config::ExcavationConfig;
use crate::error::Result;
use crate::geometry::{Ring, Winding};
use crate::operations::offset::RingOffset2D;
use crate::operations::query::{AreaMethod, FrustumVolume, Perimeter, RingArea};
use crate::projection::{CoordinateTransform, Crs};

use super::{ExcavationParameters, ExcavationReport, ReportSink, Requirements};

/// Derives the bottom outline, areas and volume of a basin from its rim.
///
/// # Algorithm
///
/// 1. Rewind the rim counter-clockwise so the left normal points inward
/// 2. Project it to the planar system
/// 3. Offset every edge inward by `depth / tan(slope)`
/// 4. Project the bottom back to lon/lat
/// 5. Measure perimeter (planar), areas and frustum volume
/// 6. Compare against the requirements of the target surface
#[derive(Debug)]
pub struct ExcavationCalculator {
    config: ExcavationConfig,
    transform: CoordinateTransform,
}

impl ExcavationCalculator {
    /// Creates a calculator, parsing the two registered projections once.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the configured ratios are invalid
    /// - `ProjectionError::InvalidDefinition` if a projection cannot be parsed
    pub fn new(config: ExcavationConfig) -> Result<Self> {
        config.validate()?;
        let transform = CoordinateTransform::registered()?;
        Ok(Self { config, transform })
    }

    #[must_use]
    pub fn config(&self) -> &ExcavationConfig {
        &self.config
    }

    #[must_use]
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Computes the full report for a rim traced in lon/lat degrees.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` for a negative or non-finite target surface
    /// - `GeometryError::DegenerateEdge` if the rim has coincident consecutive vertices
    /// - `GeometryError::ParallelOffsetLines` if the rim has collinear consecutive
    ///   edges and the configured policy rejects them
    /// - `GeometryError::OffsetCollapsed` if the slope run exceeds what the
    ///   rim can hold, so the bottom would close before reaching the depth
    /// - `ProjectionError::Transform` if a vertex cannot be projected
    pub fn calculate(
        &self,
        rim: &Ring,
        params: &ExcavationParameters,
        target_surface: f64,
    ) -> Result<ExcavationReport> {
        let requirements = Requirements::from_target(
            target_surface,
            self.config.surface_ratio,
            self.config.volume_ratio,
        )?;

        let top_ring_geo = rim.rewound(Winding::CounterClockwise);
        let top_ring_planar =
            self.transform
                .transform_ring(&top_ring_geo, Crs::Wgs84, Crs::BelgianLambert72)?;

        let offset_distance = params.offset_distance();
        let bottom_ring_planar = RingOffset2D::new(&top_ring_planar, offset_distance)
            .with_parallel_policy(self.config.parallel_policy)
            .execute()?;
        let bottom_ring_geo =
            self.transform
                .transform_ring(&bottom_ring_planar, Crs::BelgianLambert72, Crs::Wgs84)?;
        debug!(
            vertices = top_ring_planar.len(),
            offset_distance, "bottom outline derived"
        );

        let perimeter = Perimeter::new(&top_ring_planar).execute();

        let (top_area, bottom_area) = match self.config.area_method {
            AreaMethod::Planar => (
                RingArea::new(&top_ring_planar, AreaMethod::Planar).execute(),
                RingArea::new(&bottom_ring_planar, AreaMethod::Planar).execute(),
            ),
            AreaMethod::Spherical => (
                RingArea::new(&top_ring_geo, AreaMethod::Spherical).execute(),
                RingArea::new(&bottom_ring_geo, AreaMethod::Spherical).execute(),
            ),
        };
        let volume = FrustumVolume::new(top_area, bottom_area, params.depth()).execute()?;

        let surface_sufficient = top_area >= requirements.required_surface;
        let volume_sufficient = volume >= requirements.required_volume;
        info!(
            top_area,
            bottom_area,
            volume,
            surface_sufficient,
            volume_sufficient,
            "excavation computed"
        );
        if !surface_sufficient {
            warn!(
                top_area,
                required = requirements.required_surface,
                "rim surface below requirement"
            );
        }
        if !volume_sufficient {
            warn!(
                volume,
                required = requirements.required_volume,
                "basin volume below requirement"
            );
        }

        Ok(ExcavationReport {
            parameters: *params,
            offset_distance,
            top_ring_geo,
            top_ring_planar,
            bottom_ring_planar,
            bottom_ring_geo,
            perimeter_segments: perimeter.segments,
            total_perimeter: perimeter.total,
            top_area,
            bottom_area,
            volume,
            requirements,
            surface_sufficient,
            volume_sufficient,
        })
    }

    /// Computes the report and hands it to `sink`.
    ///
    /// # Errors
    ///
    /// See [`ExcavationCalculator::calculate`]; also propagates sink errors.
    pub fn calculate_and_publish(
        &self,
        rim: &Ring,
        params: &ExcavationParameters,
        target_surface: f64,
        sink: &mut dyn ReportSink,
    ) -> Result<ExcavationReport> {
        let report = self.calculate(rim, params, target_surface)?;
        sink.publish(&report)?;
        Ok(report)
    }
}
