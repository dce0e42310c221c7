//! Progress reporting trait.

/// Observer for drain progress.
///
/// The CLI backs this with a terminal spinner; tests record the calls.
pub trait ProgressReporter {
    /// Called once when a drain begins.
    fn start(&mut self);

    /// Called after each appended record with the running total.
    fn update(&mut self, count: usize);

    /// Called once when the drain completes.
    fn finish(&mut self);
}
