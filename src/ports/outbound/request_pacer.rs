/// RequestPacer port for spacing out API calls
///
/// The Nucleus API rate-limits aggressively, so the pipeline pauses before
/// each per-asset findings request. Putting the pause behind a port keeps
/// the wait out of tests.
pub trait RequestPacer {
    /// Blocks until the next request may be sent
    fn pause(&self);
}
