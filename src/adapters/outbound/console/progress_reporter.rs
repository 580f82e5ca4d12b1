use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner redraw interval while a request is in flight
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for a spinner while the backend is working.
///
/// In quiet mode informational output and the spinner are suppressed;
/// errors and warnings are always printed.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet: true,
        }
    }

    fn start_spinner(&self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);

        let previous = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(spinner);
        if let Some(previous) = previous {
            previous.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
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
        if self.quiet {
            return;
        }
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_waiting(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.start_spinner(message);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if self.quiet {
            return;
        }
        eprintln!("✅ {}", message);
    }
}
