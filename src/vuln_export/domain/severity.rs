use std::fmt;

/// Criticality tier of a finding, spelled the way the Nucleus API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Tiers that get their own per-asset export files. Medium counts toward
    /// the vulnerable-asset summary but is not exported per asset.
    pub const EXPORTED: [Severity; 2] = [Severity::Critical, Severity::High];

    /// Exact value carried in the `finding_severity` field.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }

    /// Lowercase form used in export file names.
    pub fn file_label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
