use crate::config::Config;

/// ExportRequest - Internal request DTO for the vulnerability export use case
///
/// Carries the API-side selection for one run. Output location and pacing
/// are wired into the use case itself, not the request.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Nucleus project identifier
    pub project_id: String,
    /// Asset group whose assets get exported
    pub asset_group: String,
}

impl ExportRequest {
    pub fn new(project_id: String, asset_group: String) -> Self {
        Self {
            project_id,
            asset_group,
        }
    }

    /// Builds the request for one run from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.project_id.clone(), config.asset_group.clone())
    }
}
