//! Geometry kernel for excavated basins.
//!
//! Takes the rim of a basin traced in lon/lat, projects it to Belgian
//! Lambert 72, shifts every edge inward by the horizontal run of the slope
//! and reports perimeter, rim and bottom areas and the frustum volume.
//!
//! ```no_run
//! use taludis::config::ExcavationConfig;
//! use taludis::io::geojson::ring_from_geojson;
//! use taludis::operations::excavation::{ExcavationCalculator, ExcavationParameters};
//!
//! # fn main() -> taludis::Result<()> {
//! let rim = ring_from_geojson(r#"{"type": "Polygon", "coordinates": [[
//!     [3.1864, 51.1834], [3.1868, 51.1834], [3.1868, 51.1837], [3.1864, 51.1834]
//! ]]}"#)?;
//! let calculator = ExcavationCalculator::new(ExcavationConfig::default())?;
//! let params = ExcavationParameters::from_centimeters(45.0, 80.0)?;
//! let report = calculator.calculate(&rim, &params, 1200.0)?;
//! println!("{:.1} m³", report.volume);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod projection;

pub use error::{Result, TaludisError};
