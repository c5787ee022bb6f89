use nucleus_export::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RequestPacer that counts pauses instead of sleeping
#[derive(Clone)]
pub struct MockRequestPacer {
    pauses: Arc<AtomicUsize>,
}

impl MockRequestPacer {
    pub fn new() -> Self {
        Self {
            pauses: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn pause_count(&self) -> usize {
        self.pauses.load(Ordering::Relaxed)
    }
}

impl Default for MockRequestPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestPacer for MockRequestPacer {
    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::Relaxed);
    }
}
