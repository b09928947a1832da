#![no_std]

pub mod cancel;
pub mod clock;
pub mod color;
pub mod error;
pub mod luminosity;
pub mod output;
pub mod preset;
pub mod runner;
pub mod sky;

pub use cancel::CancelToken;
pub use clock::{BlockingSleeper, EmbassyClock, MonotonicClock, Sleeper};
pub use error::InvalidConfiguration;
pub use luminosity::{LuminosityProfile, spatial_curve, temporal_multiplier};
pub use output::SmartLedsOutput;
pub use runner::{AnimationRunner, RunOutcome, RunReport, RunnerConfig, RunnerState};
pub use sky::{Frame, Sky};

pub use color::{Color, Rgb};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation runner is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

impl<T: OutputDriver + ?Sized> OutputDriver for &mut T {
    fn write(&mut self, colors: &[Rgb]) {
        (**self).write(colors);
    }
}
