use crate::ports::outbound::AssetRepository;
use crate::shared::error::ExportError;
use crate::shared::Result;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::{debug, error};

/// Nucleus API client implementing the asset repository port
///
/// Authenticates every request with the `x-apikey` header. Asset listings
/// use a single 500-record page; groups larger than that are truncated,
/// matching how the rest of the reporting tooling reads them.
///
/// # Security
/// - Certificate validation is disabled: the appliance sits behind an
///   internal load balancer that presents a self-signed certificate
/// - No retry on failed requests (a failed export must not half-complete)
/// - Request pacing lives behind [`RequestPacer`](crate::ports::outbound::RequestPacer),
///   not in this client
pub struct NucleusClient {
    client: Client,
    base_url: String,
}

impl NucleusClient {
    /// Listing window for asset queries. The API default is 100.
    const ASSET_PAGE_LIMIT: u32 = 500;

    /// Creates a client for the given API endpoint and key
    pub fn new(api_endpoint: &str, api_key: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nucleus-export/{}", version);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut key_value = HeaderValue::from_str(api_key)?;
        key_value.set_sensitive(true);
        headers.insert("x-apikey", key_value);

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            base_url: api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn assets_url(&self, project_id: &str, asset_group: &str) -> String {
        format!(
            "{}/projects/{}/assets?asset_groups={}&start=0&inactive_assets=false&limit={}",
            self.base_url,
            urlencoding::encode(project_id),
            urlencoding::encode(asset_group),
            Self::ASSET_PAGE_LIMIT
        )
    }

    fn findings_url(&self, project_id: &str, asset_id: &str) -> String {
        format!(
            "{}/projects/{}/assets/{}/findings",
            self.base_url,
            urlencoding::encode(project_id),
            urlencoding::encode(asset_id)
        )
    }

    fn get_records(&self, url: &str) -> Result<Vec<Value>> {
        debug!(url, "sending GET request");
        let response = self.client.get(url).send()?;
        read_listing(url, response)
    }
}

impl AssetRepository for NucleusClient {
    fn fetch_assets(&self, project_id: &str, asset_group: &str) -> Result<Vec<Value>> {
        self.get_records(&self.assets_url(project_id, asset_group))
    }

    fn fetch_findings(&self, project_id: &str, asset_id: &str) -> Result<Vec<Value>> {
        self.get_records(&self.findings_url(project_id, asset_id))
    }
}

/// Turns a response into raw records, or into the fatal API error that
/// stops the run.
fn read_listing(url: &str, response: Response) -> Result<Vec<Value>> {
    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("unknown").to_string();
        let body = response.text().unwrap_or_default();
        error!(
            url,
            status = status.as_u16(),
            reason = %reason,
            body = %body,
            "Nucleus API request failed"
        );
        return Err(ExportError::Api {
            url: url.to_string(),
            status: status.as_u16(),
            reason,
            body,
        }
        .into());
    }

    let records: Vec<Value> = response.json()?;
    Ok(records)
}
