//! Configuration errors
//!
//! Everything the sunrise needs is known at construction time, so the only
//! failures are rejected configurations. They are reported once, when the
//! [`Sky`](crate::Sky) or [`AnimationRunner`](crate::AnimationRunner) is built.

use thiserror::Error;

/// Rejected sunrise configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// Gradient was requested without any stop colors
    #[error("gradient requires at least one stop color")]
    EmptyStops,
    /// More stop colors than the mirrored stop buffer can hold
    #[error("gradient accepts at most {max} stop colors, got {count}")]
    TooManyStops { count: usize, max: usize },
    /// Animation duration is zero
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    /// Frame step is zero
    #[error("frame step must be greater than zero")]
    ZeroStep,
    /// Frame step too long to be measured between two clock readings
    #[error("frame step must be at most {max} ms")]
    StepTooLong { max: u32 },
}
