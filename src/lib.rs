//! nucleus-export - Vulnerability data export tool for the Nucleus API
//!
//! This library pulls the assets of one Nucleus project group, filters them
//! down to vulnerable hosts, and exports assets, summary and per-severity
//! finding files as CSV/JSON reports, following hexagonal architecture
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`vuln_export`): Asset views, finding filters and
//!   CSV shaping
//! - **Application Layer** (`application`): The export use case and DTOs
//! - **Ports** (`ports`): Traits over the Nucleus API, report files and
//!   request pacing
//! - **Adapters** (`adapters`): The HTTP client, file writers and pacer
//!   behind those traits
//! - **Shared** (`shared`): Error types and the crate-wide `Result`
//!
//! # Example
//!
//! ```no_run
//! use nucleus_export::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Load configuration and prepare the output directory
//! let config = Config::from_env()?;
//! let data_dir = data_dir::prepare(&config.data_dir, false)?;
//!
//! // Create use case with injected adapters
//! let use_case = ExportVulnsUseCase::new(
//!     NucleusClient::new(&config.api_endpoint, &config.api_key)?,
//!     FixedDelayPacer::default(),
//!     ExportWriter::new(data_dir),
//! );
//!
//! // Execute
//! let summary = use_case.export(ExportRequest::from_config(&config))?;
//! println!("{} files written", summary.files_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod vuln_export;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{data_dir, ExportWriter};
    pub use crate::adapters::outbound::network::NucleusClient;
    pub use crate::adapters::outbound::pacing::FixedDelayPacer;
    pub use crate::application::dto::{ExportRequest, ExportSummary};
    pub use crate::application::use_cases::ExportVulnsUseCase;
    pub use crate::config::Config;
    pub use crate::ports::inbound::VulnExportPort;
    pub use crate::ports::outbound::{AssetRepository, ReportWriter, RequestPacer};
    pub use crate::shared::Result;
    pub use crate::vuln_export::domain::{
        active_findings_for, Asset, FindingEnvelope, Severity, SummaryRow,
    };
    pub use crate::vuln_export::services::{file_names, flatten};
}
