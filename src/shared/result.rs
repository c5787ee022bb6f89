/// Crate-wide Result alias over `anyhow::Error`, so every layer of the
/// pipeline propagates failures the same way.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
