/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the Nucleus HTTP
/// client, the report file writers and the fixed-delay pacer.
pub mod outbound;
