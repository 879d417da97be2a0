//! Computes one basin report from a GeoJSON rim and prints it as JSON.
//!
//! Usage:
//! ```text
//! cargo run --example basin_report -- --rim rim.geojson --angle 45 --depth-cm 80 --target 1200
//! cargo run --example basin_report                  # built-in rim near Bruges
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use taludis::config::ExcavationConfig;
use taludis::io::geojson::ring_from_geojson;
use taludis::operations::excavation::{ExcavationCalculator, ExcavationParameters, ReportLog};

const DEFAULT_RIM: &str = r#"{
    "type": "Feature",
    "properties": {},
    "geometry": {
        "type": "Polygon",
        "coordinates": [[
            [3.18630, 51.18340], [3.18690, 51.18335], [3.18700, 51.18375],
            [3.18650, 51.18390], [3.18625, 51.18370], [3.18630, 51.18340]
        ]]
    }
}"#;

#[derive(Parser)]
#[command(name = "basin_report")]
#[command(about = "Bottom outline, areas and volume of an excavated basin")]
struct Args {
    /// GeoJSON Polygon or Feature with the rim; built-in rim when omitted
    #[arg(long)]
    rim: Option<PathBuf>,
    /// Slope angle in degrees
    #[arg(long, default_value_t = 45.0)]
    angle: f64,
    /// Depth in centimeters
    #[arg(long, default_value_t = 80.0)]
    depth_cm: f64,
    /// Target surface in m²
    #[arg(long, default_value_t = 1200.0)]
    target: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Default: WARN for everything, INFO for taludis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=taludis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("taludis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let source = match &args.rim {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_RIM.to_owned(),
    };

    let rim = ring_from_geojson(&source)?;
    let params = ExcavationParameters::from_centimeters(args.angle, args.depth_cm)?;
    let calculator = ExcavationCalculator::new(ExcavationConfig::default())?;

    let mut log = ReportLog::new();
    let report = calculator.calculate_and_publish(&rim, &params, args.target, &mut log)?;

    println!("{}", report.summary_cells().join(" | "));
    println!("{} report(s) logged", log.reports().len());
    println!("{}", serde_json::to_string_pretty(&report.bottom_feature())?);
    Ok(())
}
