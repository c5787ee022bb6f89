/// Inbound ports (Driving ports) - Use case interfaces
///
/// The surface the binary driver (and any future scheduler) calls to
/// run an export.
pub mod vuln_export_port;

pub use vuln_export_port::VulnExportPort;
