//! Cooperative cancellation for the long-running task loops.
//!
//! Production firmware never cancels: the loops run until reset.  The token
//! exists so a test harness (or a future shutdown path) can bound the number
//! of iterations without special-casing the loop bodies.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag, checked once per loop iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every loop holding a clone of this token to stop after its
    /// current iteration.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
