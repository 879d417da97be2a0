use crate::error::Result;

use super::ExcavationReport;

/// Receives finished reports, e.g. a map overlay or a results table.
pub trait ReportSink {
    /// Presents one report.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the report cannot be presented.
    fn publish(&mut self, report: &ExcavationReport) -> Result<()>;
}

/// In-memory sink keeping every published report in order, like the rows
/// of a results table.
#[derive(Debug, Default)]
pub struct ReportLog {
    reports: Vec<ExcavationReport>,
}

impl ReportLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> &[ExcavationReport] {
        &self.reports
    }

    /// Drops all rows.
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl ReportSink for ReportLog {
    fn publish(&mut self, report: &ExcavationReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
