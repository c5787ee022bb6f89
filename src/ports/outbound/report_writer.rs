use crate::shared::Result;
use crate::vuln_export::domain::{FindingEnvelope, Severity, SummaryRow};
use serde_json::Value;
use std::path::PathBuf;

/// ReportWriter port for persisting export files
///
/// Implementations own the data-directory layout; the use case only decides
/// what gets written. All methods propagate IO failures.
pub trait ReportWriter {
    /// Writes the full asset listing, both flattened CSV and verbatim JSON
    fn write_assets(&self, assets: &[Value]) -> Result<()>;

    /// Writes the vulnerable-asset summary CSV, header included even when
    /// `rows` is empty
    ///
    /// # Returns
    /// The path of the written summary file
    fn write_summary(&self, rows: &[SummaryRow]) -> Result<PathBuf>;

    /// Writes the JSON/CSV pair for one asset and severity
    ///
    /// # Arguments
    /// * `application` - Application short name for the file stem
    /// * `asset_name` - Asset name for the file stem
    /// * `severity` - Tier the envelopes were filtered to
    /// * `envelopes` - Findings to export; callers never pass an empty list
    ///
    /// # Returns
    /// Paths of the written JSON and CSV files
    fn write_findings(
        &self,
        application: Option<&str>,
        asset_name: Option<&str>,
        severity: Severity,
        envelopes: &[FindingEnvelope],
    ) -> Result<(PathBuf, PathBuf)>;
}
