use crate::ports::outbound::RequestPacer;
use std::thread;
use std::time::Duration;

/// Fixed-delay pacer for Nucleus API calls
///
/// The API throttles bulk pulls hard, so production export runs sleep five
/// seconds before each per-asset findings request. No adaptive backoff.
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    /// Delay used by production export runs.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl RequestPacer for FixedDelayPacer {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}
