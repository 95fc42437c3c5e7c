use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter drawing ingest progress on stderr
///
/// The first `report_progress` call creates an indicatif bar sized to the
/// target; later status lines are printed above the bar so it stays in place.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    const TEMPLATE: &'static str =
        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            if pb.length() != Some(total as u64) {
                pb.set_length(total as u64);
            }
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(Self::TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(format!("⚠️  {}", message)),
            None => eprintln!("⚠️  {}", message),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Fetching top 10 npm packages...");
        reporter.report_progress(5, 10, Some("npm"));
        reporter.report("    Fetched 5 packages (+5 new, offset: 250)");
        reporter.report_warning("Stopping 'npm' - too many duplicates");
        reporter.report_completion("Total: 5 packages");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_bar_resizes_when_target_changes() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 10, None);
        reporter.report_progress(2, 20, None);
        let length = reporter.progress_bar.borrow().as_ref().and_then(|pb| pb.length());
        assert_eq!(length, Some(20));
    }
}
