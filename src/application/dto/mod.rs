/// Data Transfer Objects for application layer
///
/// The request and summary types crossing the inbound port, keeping the
/// domain layer out of the driver's hands.
mod export_request;
mod export_summary;

pub use export_request::ExportRequest;
pub use export_summary::ExportSummary;
