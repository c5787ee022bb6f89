use crate::application::dto::{ExportRequest, ExportSummary};
use crate::shared::Result;

/// VulnExportPort - Inbound port for the vulnerability export use case
///
/// This port defines the interface that external adapters (CLI, schedulers)
/// use to run a full export. It represents the application's public API.
pub trait VulnExportPort {
    /// Runs the three-stage export for one project and asset group
    ///
    /// # Arguments
    /// * `request` - Project and asset group to export
    ///
    /// # Returns
    /// A summary of what the run listed, filtered and wrote
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any API request fails or answers with a non-success status
    /// - An asset in the listing has no usable `asset_id`
    /// - An export file cannot be written
    fn export(&self, request: ExportRequest) -> Result<ExportSummary>;
}
