/// ProgressReporter port for user feedback during operations
///
/// Reports go to stderr in the console adapter so that stdout only ever
/// carries the merged lock file.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that step `current` of `total` has started
    ///
    /// # Arguments
    /// * `current` - Current step, 1-based
    /// * `total` - Number of steps
    /// * `message` - Optional description of the step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
