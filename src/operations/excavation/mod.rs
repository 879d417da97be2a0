mod calculator;
mod params;
mod report;
mod sink;

pub use calculator::ExcavationCalculator;
pub use params::ExcavationParameters;
pub use report::{ExcavationReport, Requirements};
pub use sink::{ReportLog, ReportSink};
