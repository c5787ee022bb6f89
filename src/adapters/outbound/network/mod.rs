/// Network adapters for external API calls
mod nucleus_client;

pub use nucleus_client::NucleusClient;
