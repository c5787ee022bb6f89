use serde_json::Value;

use super::severity::Severity;

/// Tolerant view over one raw asset object from the project-group listing.
///
/// The raw JSON stays untouched for the verbatim exports; this view pulls out
/// only the fields the pipeline reads. Lookups never fail: absent fields
/// become `None` and absent counts become `"0"` so the asset is simply not
/// treated as vulnerable.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub asset_id: Option<String>,
    pub asset_type: Option<String>,
    pub asset_name: Option<String>,
    pub ip_address: Option<String>,
    pub application_id: Option<String>,
    pub application_short_name: Option<String>,
    pub archer_criticality: Option<String>,
    pub archer_pci: Option<String>,
    pub tanium_location: Option<String>,
    pub tanium_model: Option<String>,
    pub tanium_environment: Option<String>,
    pub operating_system_name: Option<String>,
    pub asset_criticality: Option<String>,
    pub finding_vulnerability_score: Option<String>,
    pub finding_count_critical: String,
    pub finding_count_high: String,
    pub finding_count_medium: String,
    pub scan_date: Option<String>,
}

impl Asset {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            asset_id: text(raw, "asset_id"),
            asset_type: text(raw, "asset_type"),
            asset_name: text(raw, "asset_name"),
            ip_address: text(raw, "ip_address"),
            application_id: info_field(raw, "archer.application_id"),
            application_short_name: info_field(raw, "archer.application_short_name"),
            archer_criticality: info_field(raw, "archer.criticality"),
            archer_pci: info_field(raw, "archer.pci"),
            tanium_location: info_field(raw, "tanium.location"),
            tanium_model: info_field(raw, "tanium.model"),
            tanium_environment: info_field(raw, "tanium.environment"),
            operating_system_name: text(raw, "operating_system_name"),
            asset_criticality: text(raw, "asset_criticality"),
            finding_vulnerability_score: text(raw, "finding_vulnerability_score"),
            finding_count_critical: count(raw, "finding_count_critical"),
            finding_count_high: count(raw, "finding_count_high"),
            finding_count_medium: count(raw, "finding_count_medium"),
            scan_date: text(raw, "scan_date"),
        }
    }

    /// `true` when any tracked count is non-zero.
    ///
    /// Counts arrive as strings and are compared byte-wise, matching how the
    /// rest of the Nucleus tooling reads them. `"0"` and `""` never pass.
    pub fn is_vulnerable(&self) -> bool {
        self.finding_count_critical.as_str() > "0"
            || self.finding_count_high.as_str() > "0"
            || self.finding_count_medium.as_str() > "0"
    }

    pub fn finding_count(&self, severity: Severity) -> &str {
        match severity {
            Severity::Critical => &self.finding_count_critical,
            Severity::High => &self.finding_count_high,
            Severity::Medium => &self.finding_count_medium,
        }
    }

    /// Byte-wise count check for one tier, same comparison as
    /// [`Asset::is_vulnerable`].
    pub fn has_findings(&self, severity: Severity) -> bool {
        self.finding_count(severity) > "0"
    }

    /// Name to show in logs when the listing had none.
    pub fn display_name(&self) -> &str {
        self.asset_name.as_deref().unwrap_or("unknown")
    }

    pub fn summary_row(&self) -> SummaryRow {
        SummaryRow {
            asset_id: self.asset_id.clone(),
            asset_type: self.asset_type.clone(),
            asset_name: self.asset_name.clone(),
            ip_address: self.ip_address.clone(),
            application_id: self.application_id.clone(),
            application_short_name: self.application_short_name.clone(),
            archer_criticality: self.archer_criticality.clone(),
            archer_pci: self.archer_pci.clone(),
            tanium_location: self.tanium_location.clone(),
            tanium_model: self.tanium_model.clone(),
            tanium_environment: self.tanium_environment.clone(),
            operating_system_name: self.operating_system_name.clone(),
            asset_criticality: self.asset_criticality.clone(),
            finding_vulnerability_score: self.finding_vulnerability_score.clone(),
            finding_count_critical: self.finding_count_critical.clone(),
            finding_count_high: self.finding_count_high.clone(),
            finding_count_medium: self.finding_count_medium.clone(),
            scan_date: self.scan_date.clone(),
        }
    }
}

/// Flat projection of a vulnerable asset, one row of `vulnerable_assets.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub asset_id: Option<String>,
    pub asset_type: Option<String>,
    pub asset_name: Option<String>,
    pub ip_address: Option<String>,
    pub application_id: Option<String>,
    pub application_short_name: Option<String>,
    pub archer_criticality: Option<String>,
    pub archer_pci: Option<String>,
    pub tanium_location: Option<String>,
    pub tanium_model: Option<String>,
    pub tanium_environment: Option<String>,
    pub operating_system_name: Option<String>,
    pub asset_criticality: Option<String>,
    pub finding_vulnerability_score: Option<String>,
    pub finding_count_critical: String,
    pub finding_count_high: String,
    pub finding_count_medium: String,
    pub scan_date: Option<String>,
}

impl SummaryRow {
    pub const HEADER: [&'static str; 18] = [
        "asset_id",
        "asset_type",
        "asset_name",
        "ip_address",
        "application_id",
        "application_short_name",
        "archer_criticality",
        "archer_pci",
        "tanium_location",
        "tanium_model",
        "tanium_environment",
        "operating_system_name",
        "asset_criticality",
        "finding_vulnerability_score",
        "finding_count_critical",
        "finding_count_high",
        "finding_count_medium",
        "scan_date",
    ];

    /// Cells in [`SummaryRow::HEADER`] order; absent fields render empty.
    pub fn record(&self) -> [&str; 18] {
        [
            self.asset_id.as_deref().unwrap_or(""),
            self.asset_type.as_deref().unwrap_or(""),
            self.asset_name.as_deref().unwrap_or(""),
            self.ip_address.as_deref().unwrap_or(""),
            self.application_id.as_deref().unwrap_or(""),
            self.application_short_name.as_deref().unwrap_or(""),
            self.archer_criticality.as_deref().unwrap_or(""),
            self.archer_pci.as_deref().unwrap_or(""),
            self.tanium_location.as_deref().unwrap_or(""),
            self.tanium_model.as_deref().unwrap_or(""),
            self.tanium_environment.as_deref().unwrap_or(""),
            self.operating_system_name.as_deref().unwrap_or(""),
            self.asset_criticality.as_deref().unwrap_or(""),
            self.finding_vulnerability_score.as_deref().unwrap_or(""),
            &self.finding_count_critical,
            &self.finding_count_high,
            &self.finding_count_medium,
            self.scan_date.as_deref().unwrap_or(""),
        ]
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `asset_info` is a flat map whose keys carry the source system as a dotted
/// prefix, e.g. `"archer.application_id"`. The whole dotted name is one key.
fn info_field(value: &Value, key: &str) -> Option<String> {
    text(value.get("asset_info")?, key)
}

fn count(value: &Value, key: &str) -> String {
    text(value, key).unwrap_or_else(|| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "asset_id": 42,
            "asset_type": "Host",
            "asset_name": "web01.corp.example",
            "ip_address": "10.1.2.3",
            "asset_info": {
                "archer.application_id": "APP-7",
                "archer.application_short_name": "billing",
                "archer.criticality": "High",
                "archer.pci": "true",
                "tanium.location": "DC-EAST",
                "tanium.model": "PowerEdge",
                "tanium.environment": "prod"
            },
            "operating_system_name": "Ubuntu 22.04",
            "asset_criticality": "3",
            "finding_vulnerability_score": "812",
            "finding_count_critical": "2",
            "finding_count_high": "0",
            "finding_count_medium": "0",
            "scan_date": "2024-05-01"
        })
    }

    #[test]
    fn extracts_top_level_and_nested_fields() {
        let asset = Asset::from_value(&sample());

        assert_eq!(asset.asset_id.as_deref(), Some("42"));
        assert_eq!(asset.asset_name.as_deref(), Some("web01.corp.example"));
        assert_eq!(asset.application_id.as_deref(), Some("APP-7"));
        assert_eq!(asset.application_short_name.as_deref(), Some("billing"));
        assert_eq!(asset.tanium_environment.as_deref(), Some("prod"));
        assert_eq!(asset.finding_count_critical, "2");
    }

    #[test]
    fn numeric_asset_id_becomes_text() {
        let asset = Asset::from_value(&json!({ "asset_id": 1007 }));
        assert_eq!(asset.asset_id.as_deref(), Some("1007"));
    }

    #[test]
    fn missing_fields_become_none_and_zero_counts() {
        let asset = Asset::from_value(&json!({ "asset_name": "bare" }));

        assert_eq!(asset.asset_id, None);
        assert_eq!(asset.application_id, None);
        assert_eq!(asset.finding_count_critical, "0");
        assert_eq!(asset.finding_count_high, "0");
        assert!(!asset.is_vulnerable());
    }

    #[test]
    fn any_nonzero_count_marks_vulnerable() {
        let mut asset = Asset::from_value(&json!({}));
        assert!(!asset.is_vulnerable());

        asset.finding_count_medium = "5".to_string();
        assert!(asset.is_vulnerable());
    }

    #[test]
    fn counts_compare_byte_wise() {
        let mut asset = Asset::from_value(&json!({}));

        // String order, not numeric order: "10" sorts below "9".
        asset.finding_count_critical = "10".to_string();
        assert!(asset.finding_count_critical.as_str() < "9");
        assert!(asset.is_vulnerable());
        assert!(asset.has_findings(Severity::Critical));
        assert!(!asset.has_findings(Severity::High));
    }

    #[test]
    fn summary_row_renders_missing_fields_empty() {
        let asset = Asset::from_value(&json!({ "asset_name": "web01" }));
        let row = asset.summary_row();
        let record = row.record();

        assert_eq!(record.len(), SummaryRow::HEADER.len());
        assert_eq!(record[0], "");
        assert_eq!(record[2], "web01");
        assert_eq!(record[14], "0");
    }
}
