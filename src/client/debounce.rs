//! Cancellable delayed actions
//!
//! `Debouncer` runs an action once input has been quiet for a fixed delay.
//! Scheduling again aborts the previous action, whether it is still waiting
//! or already running. Dropping the debouncer aborts whatever is pending, so
//! nothing fires after its owner is gone.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay used by the mobile client after the last keystroke
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `action` after the delay, superseding any previously scheduled action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending action, if any
    pub fn cancel(&self) {
        if let Some(pending) = self.slot().take() {
            pending.abort();
        }
    }

    /// Whether an action is scheduled and has not finished yet
    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the pending action (if any) to fire and complete
    pub async fn flush(&self) {
        let pending = self.slot().take();
        if let Some(handle) = pending {
            // An aborted action is not an error here
            let _ = handle.await;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
