//! Time sources for the animation loop
//!
//! The runner only needs a wrapping millisecond counter and a blocking
//! sleep. Both are traits so the loop can run on any platform (or against a
//! fake clock in tests); `embassy-time` backed implementations are provided.

use embassy_time::{Duration, Instant};

/// Monotonic millisecond counter
///
/// The counter may wrap around `u32::MAX`. The runner sums the
/// [`forward_millis`] between consecutive readings, so a run may last longer
/// than one wrap as long as readings are less than
/// [`MAX_READING_GAP_MILLIS`] apart.
pub trait MonotonicClock {
    /// Current counter value in milliseconds
    fn now_millis(&self) -> u32;
}

/// Blocking sleep primitive
///
/// Best-effort accuracy is enough, the runner re-reads the clock after
/// every sleep.
pub trait Sleeper {
    /// Block for roughly `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Longest gap between two readings that still counts as forward time
///
/// Half of the counter range: a wrapped difference above it means `now` is
/// behind the previous reading.
pub const MAX_READING_GAP_MILLIS: u32 = u32::MAX >> 1;

/// Milliseconds between two counter readings, correct across one wrap
#[inline]
pub const fn elapsed_millis(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

/// Forward milliseconds from `previous` to `now`
///
/// A reading behind `previous` yields 0, so summed deltas never decrease.
#[inline]
pub const fn forward_millis(previous: u32, now: u32) -> u32 {
    let delta = elapsed_millis(previous, now);
    if delta > MAX_READING_GAP_MILLIS {
        0
    } else {
        delta
    }
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
///
/// Zero duration counts as finished.
#[allow(clippy::cast_precision_loss)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_millis() == 0 || elapsed >= duration {
        return 1.0;
    }

    elapsed.as_millis() as f32 / duration.as_millis() as f32
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> u32 {
        // Truncation keeps the low bits, wrap is handled by `elapsed_millis`
        Instant::now().as_millis() as u32
    }
}

/// Busy-waiting sleeper backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingSleeper;

impl Sleeper for BlockingSleeper {
    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}
