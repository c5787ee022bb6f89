/// ExportSummary - What one export run listed, filtered and wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Assets returned by the listing call
    pub asset_count: usize,
    /// Assets carrying at least one critical, high or medium finding
    pub vulnerable_count: usize,
    /// Files written to the data folder, listings and pairs included
    pub files_written: usize,
}

impl ExportSummary {
    pub fn new(asset_count: usize, vulnerable_count: usize, files_written: usize) -> Self {
        Self {
            asset_count,
            vulnerable_count,
            files_written,
        }
    }
}
