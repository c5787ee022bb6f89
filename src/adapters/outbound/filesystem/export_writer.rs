use crate::ports::outbound::ReportWriter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use crate::vuln_export::domain::{FindingEnvelope, Severity, SummaryRow};
use crate::vuln_export::services::file_names;
use crate::vuln_export::services::flatten::flatten_records;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::data_dir::FINDINGS_SUBDIR;

const ASSETS_CSV: &str = "assets.csv";
const ASSETS_JSON: &str = "assets.json";
const SUMMARY_CSV: &str = "vulnerable_assets.csv";

/// ExportWriter adapter for the report files of one run
///
/// Every file lands under the prepared data directory; the per-asset pairs
/// go to its `findings/` subdirectory. IO failures map to
/// `ExportError::FileWrite` with the offending path.
pub struct ExportWriter {
    data_dir: PathBuf,
}

impl ExportWriter {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

impl ReportWriter for ExportWriter {
    /// Writes `assets.csv` (flattened one level) and `assets.json` (the
    /// untouched array, pretty-printed).
    fn write_assets(&self, assets: &[Value]) -> Result<()> {
        let csv_path = self.data_dir.join(ASSETS_CSV);
        write_flattened_csv(&csv_path, assets)?;
        info!(path = %csv_path.display(), count = assets.len(), "assets saved");

        let json_path = self.data_dir.join(ASSETS_JSON);
        let body = serde_json::to_string_pretty(assets)?;
        fs::write(&json_path, body).map_err(|e| file_write_error(&json_path, e))?;
        info!(path = %json_path.display(), "assets saved");
        Ok(())
    }

    /// Writes `vulnerable_assets.csv`. The header goes out even when no
    /// asset qualified.
    fn write_summary(&self, rows: &[SummaryRow]) -> Result<PathBuf> {
        let path = self.data_dir.join(SUMMARY_CSV);
        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| file_write_error(&path, e))?;

        writer
            .write_record(SummaryRow::HEADER)
            .map_err(|e| file_write_error(&path, e))?;
        for row in rows {
            writer
                .write_record(row.record())
                .map_err(|e| file_write_error(&path, e))?;
        }
        writer.flush().map_err(|e| file_write_error(&path, e))?;

        info!(path = %path.display(), count = rows.len(), "vulnerable assets saved");
        Ok(path)
    }

    /// Writes the JSON/CSV pair for one asset and severity under
    /// `findings/`. Callers skip this entirely when the list is empty, so
    /// no empty-file artifacts appear.
    fn write_findings(
        &self,
        application: Option<&str>,
        asset_name: Option<&str>,
        severity: Severity,
        envelopes: &[FindingEnvelope],
    ) -> Result<(PathBuf, PathBuf)> {
        let stem = file_names::findings_stem(application, asset_name, severity);
        let findings_dir = self.data_dir.join(FINDINGS_SUBDIR);

        let json_path = findings_dir.join(format!("{stem}.json"));
        let body = serde_json::to_string(envelopes)?;
        fs::write(&json_path, body).map_err(|e| file_write_error(&json_path, e))?;
        info!(path = %json_path.display(), count = envelopes.len(), "findings saved");

        let records = envelopes
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()?;
        let csv_path = findings_dir.join(format!("{stem}.csv"));
        write_flattened_csv(&csv_path, &records)?;
        info!(path = %csv_path.display(), "findings saved");

        Ok((json_path, csv_path))
    }
}

fn write_flattened_csv(path: &Path, records: &[Value]) -> Result<()> {
    let (columns, rows) = flatten_records(records);

    let mut writer = csv::Writer::from_path(path).map_err(|e| file_write_error(path, e))?;
    if !columns.is_empty() {
        writer
            .write_record(&columns)
            .map_err(|e| file_write_error(path, e))?;
        for row in rows {
            writer
                .write_record(&row)
                .map_err(|e| file_write_error(path, e))?;
        }
    }
    writer.flush().map_err(|e| file_write_error(path, e))?;
    Ok(())
}

fn file_write_error(path: &Path, details: impl std::fmt::Display) -> ExportError {
    ExportError::FileWrite {
        path: path.to_path_buf(),
        details: details.to_string(),
    }
}
