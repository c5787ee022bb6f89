/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the Nucleus API, the filesystem,
/// pacing between requests).
pub mod asset_repository;
pub mod report_writer;
pub mod request_pacer;

pub use asset_repository::AssetRepository;
pub use report_writer::ReportWriter;
pub use request_pacer::RequestPacer;
