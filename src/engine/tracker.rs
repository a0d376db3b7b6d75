//! Thread-safe progress accounting for a scan.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Point-in-time copy of the tracker counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    pub processed: usize,
    pub errors: usize,
    pub active: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            processed: 0,
            errors: 0,
            active: true,
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<ProgressState>,
    cancelled: AtomicBool,
}

/// Counters shared by scan workers (writers) and the status line (reader).
///
/// Cloning yields another handle to the same counters. Every method takes the
/// lock for a single short critical section and never holds it across calls.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    shared: Arc<Shared>,
}

impl ProgressTracker {
    /// Create an active tracker with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        // Counters stay consistent even if a holder panicked: each update is a single increment.
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a file that was read and matched.
    pub fn mark_processed(&self) {
        self.lock().processed += 1;
    }

    /// Record a file or entry that could not be read.
    pub fn mark_error(&self) {
        self.lock().errors += 1;
    }

    /// Mark the scan as finished. Idempotent.
    pub fn stop(&self) {
        self.lock().active = false;
    }

    pub fn snapshot(&self) -> ProgressState {
        *self.lock()
    }

    /// Ask scan workers to stop before their next file.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }
}
