use serde::Serialize;
use serde_json::Value;

use super::asset::Asset;
use super::severity::Severity;

/// Status a finding must carry to make it into an export.
const ACTIVE_STATUS: &str = "Active";

/// One exported finding with the owning asset's identity denormalized on,
/// so each file stands alone. `finding_details` is the finding exactly as
/// the API returned it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FindingEnvelope {
    pub finding_details: Value,
    pub asset_id: Option<String>,
    pub asset_name: Option<String>,
    pub ip_address: Option<String>,
}

/// Keeps the active findings of the given severity and wraps each one with
/// the asset's identity.
pub fn active_findings_for(
    findings: &[Value],
    severity: Severity,
    asset: &Asset,
) -> Vec<FindingEnvelope> {
    findings
        .iter()
        .filter(|finding| is_active(finding) && has_severity(finding, severity))
        .map(|finding| FindingEnvelope {
            finding_details: finding.clone(),
            asset_id: asset.asset_id.clone(),
            asset_name: asset.asset_name.clone(),
            ip_address: asset.ip_address.clone(),
        })
        .collect()
}

fn is_active(finding: &Value) -> bool {
    finding.get("finding_status").and_then(Value::as_str) == Some(ACTIVE_STATUS)
}

fn has_severity(finding: &Value, severity: Severity) -> bool {
    finding.get("finding_severity").and_then(Value::as_str) == Some(severity.label())
}
