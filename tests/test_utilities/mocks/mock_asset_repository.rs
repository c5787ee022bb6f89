use nucleus_export::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Mock AssetRepository for testing
pub struct MockAssetRepository {
    pub assets: Vec<Value>,
    pub findings: HashMap<String, Vec<Value>>,
    pub fail_assets: bool,
    pub fail_findings: bool,
}

impl MockAssetRepository {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            findings: HashMap::new(),
            fail_assets: false,
            fail_findings: false,
        }
    }

    pub fn with_asset(mut self, asset: Value) -> Self {
        self.assets.push(asset);
        self
    }

    pub fn with_findings(mut self, asset_id: &str, findings: Vec<Value>) -> Self {
        self.findings.insert(asset_id.to_string(), findings);
        self
    }

    /// Fails the asset listing call, as a non-200 from the API would
    pub fn with_listing_failure() -> Self {
        Self {
            fail_assets: true,
            ..Self::new()
        }
    }

    /// Fails every findings call while the listing still succeeds
    pub fn with_findings_failure(mut self) -> Self {
        self.fail_findings = true;
        self
    }
}

impl Default for MockAssetRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRepository for MockAssetRepository {
    fn fetch_assets(&self, _project_id: &str, _asset_group: &str) -> Result<Vec<Value>> {
        if self.fail_assets {
            anyhow::bail!("Mock asset listing failure: 500 Internal Server Error");
        }
        Ok(self.assets.clone())
    }

    fn fetch_findings(&self, _project_id: &str, asset_id: &str) -> Result<Vec<Value>> {
        if self.fail_findings {
            anyhow::bail!("Mock findings failure: 500 Internal Server Error");
        }
        Ok(self.findings.get(asset_id).cloned().unwrap_or_default())
    }
}
