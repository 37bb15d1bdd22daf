/// ProgressReporter port: the diagnostic channel of a run
///
/// Messages are informational only; implementations must never influence
/// control flow, and dropping every message is a valid implementation.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of items
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (e.g. a skipped distribution file)
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
