//! Cooperative stop request for hosted control loops.

use core::sync::atomic::{AtomicBool, Ordering};

/// Flag checked by [`Controller::run_until`](super::Controller::run_until)
/// before every iteration.
///
/// Can live in a `static` and be set from an interrupt handler or another thread.
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request the loop to stop after the current iteration.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether a stop was requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clear a previous request so the token can be reused.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
