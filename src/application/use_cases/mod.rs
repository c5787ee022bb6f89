/// Use cases module containing application business logic orchestration
mod export_vulns;

pub use export_vulns::ExportVulnsUseCase;
