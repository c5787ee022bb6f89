/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports (driving) expose the export use case; outbound ports
/// (driven) abstract the Nucleus API, the report files and request pacing.
pub mod inbound;
pub mod outbound;
