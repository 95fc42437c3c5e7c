/// ProgressReporter port for user-facing progress output
///
/// Structured diagnostics go through `tracing`; this port carries the lines a
/// person watching an ingest run wants to see.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports how far the run is toward its goal
    ///
    /// # Arguments
    /// * `current` - Records collected so far
    /// * `total` - Target record count
    /// * `message` - Optional short label (e.g. the active search term)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports that a phase has finished
    fn report_completion(&self, message: &str);
}
