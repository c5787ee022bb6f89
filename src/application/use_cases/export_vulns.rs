use crate::application::dto::{ExportRequest, ExportSummary};
use crate::ports::inbound::VulnExportPort;
use crate::ports::outbound::{AssetRepository, ReportWriter, RequestPacer};
use crate::shared::Result;
use crate::vuln_export::domain::{active_findings_for, Asset, Severity, SummaryRow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

/// ExportVulnsUseCase - Use case for the three-stage vulnerability export
///
/// Stage 1 lists the asset group and writes the raw listing. Stage 2 filters
/// it down to vulnerable assets and writes the summary CSV. Stage 3 walks
/// every listed asset, paced between API calls, and writes the per-severity
/// finding files. The first failed API call or write aborts the run.
///
/// # Type Parameters
/// * `R` - AssetRepository implementation
/// * `P` - RequestPacer implementation
/// * `W` - ReportWriter implementation
pub struct ExportVulnsUseCase<R: AssetRepository, P: RequestPacer, W: ReportWriter> {
    asset_repository: R,
    pacer: P,
    writer: W,
}

impl<R: AssetRepository, P: RequestPacer, W: ReportWriter> ExportVulnsUseCase<R, P, W> {
    /// Creates a new ExportVulnsUseCase with injected dependencies
    pub fn new(asset_repository: R, pacer: P, writer: W) -> Self {
        Self {
            asset_repository,
            pacer,
            writer,
        }
    }

    /// Stage 2: keeps assets whose critical, high or medium count is
    /// non-zero and projects them into summary rows.
    fn vulnerable_rows(&self, assets: &[Asset]) -> Vec<SummaryRow> {
        let mut rows = Vec::new();
        for asset in assets {
            if asset.is_vulnerable() {
                info!(asset = asset.display_name(), "adding to vulnerable hosts");
                rows.push(asset.summary_row());
            } else {
                info!(
                    asset = asset.display_name(),
                    "no critical, high or medium findings, skipping"
                );
            }
        }
        rows
    }

    /// Stage 3: fetches findings for every listed asset and writes the
    /// JSON/CSV pair per exported severity. Returns the number of files
    /// written.
    fn export_findings(&self, request: &ExportRequest, assets: &[Asset]) -> Result<usize> {
        let progress = ProgressBar::new(assets.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                .expect("Failed to set progress bar template")
                .progress_chars("=>-"),
        );
        progress.set_message("Fetching findings...");

        let mut files_written = 0;
        for asset in assets {
            progress.set_message(asset.display_name().to_string());

            // Pause before every findings call, the first one included.
            self.pacer.pause();

            let asset_id = asset.asset_id.as_deref().ok_or_else(|| {
                anyhow::anyhow!(
                    "asset '{}' has no asset_id, cannot fetch its findings",
                    asset.display_name()
                )
            })?;

            debug!(asset_id, "fetching findings");
            let findings = self
                .asset_repository
                .fetch_findings(&request.project_id, asset_id)?;

            for severity in Severity::EXPORTED {
                if !asset.has_findings(severity) {
                    continue;
                }

                let envelopes = active_findings_for(&findings, severity, asset);
                if envelopes.is_empty() {
                    warn!(
                        asset = asset.display_name(),
                        severity = %severity,
                        "count was non-zero but no active finding matched"
                    );
                    continue;
                }

                info!(
                    asset = asset.display_name(),
                    severity = %severity,
                    count = envelopes.len(),
                    "exporting findings"
                );
                self.writer.write_findings(
                    asset.application_short_name.as_deref(),
                    asset.asset_name.as_deref(),
                    severity,
                    &envelopes,
                )?;
                files_written += 2;
            }

            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(files_written)
    }
}

impl<R: AssetRepository, P: RequestPacer, W: ReportWriter> VulnExportPort
    for ExportVulnsUseCase<R, P, W>
{
    fn export(&self, request: ExportRequest) -> Result<ExportSummary> {
        info!(
            group = %request.asset_group,
            "calling Nucleus API for the asset listing"
        );
        let raw_assets = self
            .asset_repository
            .fetch_assets(&request.project_id, &request.asset_group)?;
        self.writer.write_assets(&raw_assets)?;
        let mut files_written = 2;

        let assets: Vec<Asset> = raw_assets.iter().map(Asset::from_value).collect();

        let rows = self.vulnerable_rows(&assets);
        let vulnerable_count = rows.len();
        self.writer.write_summary(&rows)?;
        files_written += 1;

        files_written += self.export_findings(&request, &assets)?;

        Ok(ExportSummary::new(
            assets.len(),
            vulnerable_count,
            files_written,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::{data_dir, ExportWriter};
    use serde_json::{json, Value};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct MockAssetRepository {
        assets: Vec<Value>,
        findings: HashMap<String, Vec<Value>>,
    }

    impl AssetRepository for MockAssetRepository {
        fn fetch_assets(&self, _project_id: &str, _asset_group: &str) -> Result<Vec<Value>> {
            Ok(self.assets.clone())
        }

        fn fetch_findings(&self, _project_id: &str, asset_id: &str) -> Result<Vec<Value>> {
            Ok(self.findings.get(asset_id).cloned().unwrap_or_default())
        }
    }

    struct CountingPacer {
        pauses: Rc<Cell<usize>>,
    }

    impl RequestPacer for CountingPacer {
        fn pause(&self) {
            self.pauses.set(self.pauses.get() + 1);
        }
    }

    fn asset(id: &str, name: &str, critical: &str, high: &str) -> Value {
        json!({
            "asset_id": id,
            "asset_name": name,
            "ip_address": "10.0.0.1",
            "asset_info": { "archer.application_short_name": "billing" },
            "finding_count_critical": critical,
            "finding_count_high": high,
            "finding_count_medium": "0"
        })
    }

    fn finding(severity: &str, status: &str) -> Value {
        json!({ "finding_severity": severity, "finding_status": status })
    }

    fn run(
        assets: Vec<Value>,
        findings: HashMap<String, Vec<Value>>,
    ) -> (TempDir, Rc<Cell<usize>>, Result<ExportSummary>) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir::prepare(&temp_dir.path().join("data"), false).unwrap();
        let pauses = Rc::new(Cell::new(0));

        let use_case = ExportVulnsUseCase::new(
            MockAssetRepository { assets, findings },
            CountingPacer {
                pauses: pauses.clone(),
            },
            ExportWriter::new(data_dir),
        );
        let result = use_case.export(ExportRequest::new(
            "13000008".to_string(),
            "Server Group".to_string(),
        ));

        (temp_dir, pauses, result)
    }

    #[test]
    fn test_export_counts_and_files() {
        let mut findings = HashMap::new();
        findings.insert(
            "1".to_string(),
            vec![finding("Critical", "Active"), finding("Critical", "Active")],
        );

        let (temp_dir, _, result) = run(
            vec![asset("1", "web01", "2", "0"), asset("2", "db01", "0", "0")],
            findings,
        );

        let summary = result.unwrap();
        assert_eq!(summary.asset_count, 2);
        assert_eq!(summary.vulnerable_count, 1);
        // assets.csv, assets.json, vulnerable_assets.csv and one JSON/CSV pair
        assert_eq!(summary.files_written, 5);

        let data = temp_dir.path().join("data");
        assert!(data.join("assets.csv").exists());
        assert!(data.join("assets.json").exists());
        assert!(data
            .join("findings/billing_web01_vulns_critical.json")
            .exists());
        assert!(!data
            .join("findings/billing_web01_vulns_high.json")
            .exists());
    }

    #[test]
    fn test_pacer_pauses_once_per_asset() {
        let (_temp_dir, pauses, result) = run(
            vec![
                asset("1", "web01", "0", "0"),
                asset("2", "db01", "0", "0"),
                asset("3", "app01", "0", "0"),
            ],
            HashMap::new(),
        );

        assert!(result.is_ok());
        assert_eq!(pauses.get(), 3);
    }

    #[test]
    fn test_all_findings_fetched_even_for_clean_assets() {
        // A clean asset still gets its findings call; only the files are gated.
        let mut findings = HashMap::new();
        findings.insert("9".to_string(), vec![finding("Critical", "Active")]);

        let (temp_dir, pauses, result) =
            run(vec![asset("9", "clean01", "0", "0")], findings);

        assert!(result.is_ok());
        assert_eq!(pauses.get(), 1);
        let findings_dir = temp_dir.path().join("data/findings");
        let written: Vec<_> = fs::read_dir(findings_dir).unwrap().collect();
        assert!(written.is_empty());
    }

    #[test]
    fn test_nonzero_count_with_no_active_match_writes_nothing() {
        let mut findings = HashMap::new();
        findings.insert(
            "1".to_string(),
            vec![finding("Critical", "Mitigated"), finding("High", "Active")],
        );

        let (temp_dir, _, result) = run(vec![asset("1", "web01", "2", "0")], findings);

        let summary = result.unwrap();
        assert_eq!(summary.vulnerable_count, 1);
        assert_eq!(summary.files_written, 3);
        let findings_dir = temp_dir.path().join("data/findings");
        let written: Vec<_> = fs::read_dir(findings_dir).unwrap().collect();
        assert!(written.is_empty());
    }

    #[test]
    fn test_asset_without_id_aborts_the_run() {
        let no_id = json!({
            "asset_name": "ghost01",
            "finding_count_critical": "1"
        });

        let (_temp_dir, _, result) = run(vec![no_id], HashMap::new());

        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("ghost01"));
        assert!(message.contains("asset_id"));
    }

    #[test]
    fn test_summary_written_before_findings_stage() {
        // Stage 3 failing must not take vulnerable_assets.csv with it.
        let no_id = json!({
            "asset_name": "ghost01",
            "finding_count_critical": "1"
        });

        let (temp_dir, _, result) = run(vec![no_id], HashMap::new());

        assert!(result.is_err());
        let summary_csv = temp_dir.path().join("data/vulnerable_assets.csv");
        let text = fs::read_to_string(summary_csv).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
