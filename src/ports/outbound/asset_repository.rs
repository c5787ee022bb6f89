use crate::shared::Result;
use serde_json::Value;

/// AssetRepository port for reading assets and findings
///
/// This port abstracts the Nucleus API. Both calls hand back the raw JSON
/// records so exports can reproduce the API payload byte for byte; typed
/// views are built on top by the caller.
pub trait AssetRepository {
    /// Fetches every asset in an asset group of a project
    ///
    /// # Arguments
    /// * `project_id` - Nucleus project identifier
    /// * `asset_group` - Asset group (project group) to list
    ///
    /// # Returns
    /// The raw asset objects exactly as the API returned them
    ///
    /// # Errors
    /// Returns an error if the request fails or the API answers with a
    /// non-success status code.
    fn fetch_assets(&self, project_id: &str, asset_group: &str) -> Result<Vec<Value>>;

    /// Fetches the findings recorded against one asset
    ///
    /// # Arguments
    /// * `project_id` - Nucleus project identifier
    /// * `asset_id` - Identifier of the asset, as listed by `fetch_assets`
    ///
    /// # Returns
    /// The raw finding objects exactly as the API returned them
    ///
    /// # Errors
    /// Returns an error if the request fails or the API answers with a
    /// non-success status code.
    fn fetch_findings(&self, project_id: &str, asset_id: &str) -> Result<Vec<Value>>;
}
