/// Console adapters for the diagnostic channel
mod progress_reporter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
