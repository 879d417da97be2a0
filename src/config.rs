use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::operations::offset::ParallelPolicy;
use crate::operations::query::AreaMethod;

/// Share of the target surface the basin rim must cover.
pub const DEFAULT_SURFACE_RATIO: f64 = 0.08;

/// Required volume per square meter of target surface (33 L/m²).
pub const DEFAULT_VOLUME_RATIO: f64 = 33.0 / 1000.0;

/// Settings for [`ExcavationCalculator`](crate::operations::excavation::ExcavationCalculator).
///
/// The reference systems are fixed (EPSG:4326 and EPSG:31370) and are not
/// part of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcavationConfig {
    pub surface_ratio: f64,
    pub volume_ratio: f64,
    pub area_method: AreaMethod,
    pub parallel_policy: ParallelPolicy,
}

impl Default for ExcavationConfig {
    fn default() -> Self {
        Self {
            surface_ratio: DEFAULT_SURFACE_RATIO,
            volume_ratio: DEFAULT_VOLUME_RATIO,
            area_method: AreaMethod::Spherical,
            parallel_policy: ParallelPolicy::Reject,
        }
    }
}

impl ExcavationConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` on malformed TOML, unknown keys,
    /// or negative/non-finite ratios.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| OperationError::InvalidInput(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the threshold ratios are usable.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a negative or non-finite ratio.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("surface_ratio", self.surface_ratio),
            ("volume_ratio", self.volume_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "config: {name} = {value} must be a non-negative number"
                ))
                .into());
            }
        }
        Ok(())
    }
}
