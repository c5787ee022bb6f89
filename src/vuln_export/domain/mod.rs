pub mod asset;
pub mod finding;
pub mod severity;

pub use asset::{Asset, SummaryRow};
pub use finding::{active_findings_for, FindingEnvelope};
pub use severity::Severity;
