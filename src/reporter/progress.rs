//! Live status line for terminal output during scanning.
//!
//! Uses Braille pattern characters for the spinner. The line polls a
//! [`ProgressTracker`] and never touches scan results.

use crate::config::ProgressConfig;
use crate::engine::{ProgressState, ProgressTracker};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const SPINNER_FRAMES: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if the animated status line should be displayed.
pub fn should_show_progress(is_tty: bool, is_ci: bool) -> bool {
    is_tty && !is_ci
}

/// Status line text for a tracker snapshot.
pub fn format_status(state: &ProgressState) -> String {
    format!(
        "Searching... {} files processed, {} errors",
        state.processed, state.errors
    )
}

/// Create a spinner with the Braille frame set.
fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_FRAMES);
    spinner.set_style(style);
    spinner
}

/// Polls a tracker and renders its counters until the tracker stops.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    visible: bool,
    interval: Duration,
    /// Period of the "still running" log line while the spinner is hidden.
    heartbeat: Option<Duration>,
}

impl StatusReporter {
    pub fn new(visible: bool, interval: Duration) -> Self {
        Self {
            visible,
            interval,
            heartbeat: None,
        }
    }

    pub fn from_config(visible: bool, config: &ProgressConfig) -> Self {
        let heartbeat = (config.heartbeat_secs > 0).then(|| Duration::from_secs(config.heartbeat_secs));
        Self {
            heartbeat,
            ..Self::new(visible, Duration::from_millis(config.interval_ms.max(1)))
        }
    }

    /// Render until `tracker` is stopped, then clear the line.
    ///
    /// The tracker lock is only held for each snapshot, never across the sleep.
    pub fn run(&self, tracker: &ProgressTracker) {
        let bar = if self.visible {
            create_spinner()
        } else {
            ProgressBar::hidden()
        };
        let mut last_beat = Instant::now();

        loop {
            let state = tracker.snapshot();
            if !state.active {
                break;
            }

            bar.set_message(format_status(&state));
            bar.tick();

            if !self.visible
                && let Some(every) = self.heartbeat
                && last_beat.elapsed() >= every
            {
                info!(
                    processed = state.processed,
                    errors = state.errors,
                    "Search still running"
                );
                last_beat = Instant::now();
            }

            thread::sleep(self.interval);
        }

        bar.finish_and_clear();
        debug!("Status line stopped");
    }

    /// Run on a dedicated thread bound to the returned handle.
    pub fn spawn(self, tracker: ProgressTracker) -> ReporterHandle {
        let worker_tracker = tracker.clone();
        let handle = thread::Builder::new()
            .name("bulkfind-status".to_string())
            .spawn(move || self.run(&worker_tracker));

        let handle = match handle {
            Ok(h) => Some(h),
            Err(e) => {
                warn!(error = %e, "Failed to start status line thread");
                None
            }
        };

        ReporterHandle { tracker, handle }
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::from_config(false, &ProgressConfig::default())
    }
}

/// Owns the status line thread. Finishing or dropping it stops the tracker
/// and joins the thread.
pub struct ReporterHandle {
    tracker: ProgressTracker,
    handle: Option<JoinHandle<()>>,
}

impl ReporterHandle {
    /// Stop the tracker and wait for the status line to clear.
    pub fn finish(mut self) {
        self.join();
    }

    fn join(&mut self) {
        self.tracker.stop();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("Status line thread panicked");
        }
    }
}

impl Drop for ReporterHandle {
    fn drop(&mut self) {
        self.join();
    }
}
