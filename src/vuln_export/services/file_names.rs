use crate::vuln_export::domain::Severity;

/// Stands in for a missing application or asset name.
const UNKNOWN: &str = "unknown";

/// Builds the `{application}_{asset}_vulns_{severity}` stem shared by the
/// JSON/CSV pair written for one asset and tier.
pub fn findings_stem(
    application: Option<&str>,
    asset_name: Option<&str>,
    severity: Severity,
) -> String {
    format!(
        "{}_{}_vulns_{}",
        sanitize(application.unwrap_or(UNKNOWN)),
        sanitize(asset_name.unwrap_or(UNKNOWN)),
        severity.file_label()
    )
}

/// Keeps name components filesystem-safe: anything outside `[A-Za-z0-9._-]`
/// becomes `_`, and an empty component falls back to `unknown`.
pub fn sanitize(component: &str) -> String {
    if component.is_empty() {
        return UNKNOWN.to_string();
    }
    component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
