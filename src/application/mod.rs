/// Application layer - Use cases and DTOs
///
/// Orchestrates the export stages over the domain services, reaching
/// infrastructure only through the outbound ports.
pub mod dto;
pub mod use_cases;
