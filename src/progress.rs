// src/progress.rs

/// Lightweight progress reporting for long-running tasks.
/// The CLI implements this to print status lines; library callers that
/// don't care pass [`NullProgress`].
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One record finished with a usable result.
    fn item_done(&mut self, _rank: u32, _name: &str) {}

    /// One record finished without a result; the run continues.
    fn item_failed(&mut self, _rank: u32, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
