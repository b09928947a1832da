//! Cancellation flag shared with the animation loop.
//!
//! Built on `critical-section`, so it can be set from an interrupt handler
//! or another task while the runner is sleeping.

use core::cell::Cell;

use critical_section::Mutex;

/// Flag checked by the runner at the top of every frame
pub struct CancelToken {
    cancelled: Mutex<Cell<bool>>,
}

impl CancelToken {
    /// Create a token that is not cancelled yet
    pub const fn new() -> Self {
        Self {
            cancelled: Mutex::new(Cell::new(false)),
        }
    }

    /// Request the runner to stop before its next frame
    pub fn cancel(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(true));
    }

    /// Clear the flag so the token can guard another run
    pub fn reset(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(false));
    }

    pub fn is_cancelled(&self) -> bool {
        critical_section::with(|cs| self.cancelled.borrow(cs).get())
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
