/// Pacing adapters spacing out API requests
mod fixed_delay;

pub use fixed_delay::FixedDelayPacer;
