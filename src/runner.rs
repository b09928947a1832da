//! Sunrise animation loop
//!
//! Samples the clock, asks the [`Sky`] for a frame and pushes it to the
//! output driver, then sleeps for a fixed step. The loop ends once the
//! elapsed time reaches the configured duration, after the final frame
//! (progress 1) has been written.
//!
//! # Usage
//!
//! ```ignore
//! let sky = Sky::<16>::new(&SUNRISE_START_STOPS, &SUNRISE_END_STOPS)?;
//! let mut runner = AnimationRunner::new(
//!     &sky,
//!     driver,
//!     EmbassyClock,
//!     BlockingSleeper,
//!     RunnerConfig::default(),
//! )?;
//! runner.run();
//! ```

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::cancel::CancelToken;
use crate::clock::{MAX_READING_GAP_MILLIS, MonotonicClock, Sleeper, forward_millis, progress};
use crate::error::InvalidConfiguration;
use crate::preset::{DEFAULT_DURATION, DEFAULT_STEP};
use crate::sky::Sky;

/// Timing of one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Total duration of the animation
    pub duration: Duration,
    /// Pause between two frames
    pub step: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            step: DEFAULT_STEP,
        }
    }
}

impl RunnerConfig {
    fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.duration.as_millis() == 0 {
            return Err(InvalidConfiguration::ZeroDuration);
        }
        if self.step.as_millis() == 0 {
            return Err(InvalidConfiguration::ZeroStep);
        }
        if self.step.as_millis() > u64::from(MAX_READING_GAP_MILLIS) {
            return Err(InvalidConfiguration::StepTooLong {
                max: MAX_READING_GAP_MILLIS,
            });
        }
        Ok(())
    }
}

/// Runner lifecycle
///
/// A runner is `Running` from construction until [`AnimationRunner::run`]
/// returns, then `Done`. Running it again goes back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Running,
    Done,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Elapsed time reached the duration and the final frame was written
    Completed,
    /// The cancel token was set before the next frame
    Cancelled,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Number of frames written to the output
    pub frames: u32,
}

/// Drives a [`Sky`] on an output driver in real time
pub struct AnimationRunner<'a, O, C, S, const N: usize>
where
    O: OutputDriver,
    C: MonotonicClock,
    S: Sleeper,
{
    sky: &'a Sky<N>,
    output: O,
    clock: C,
    sleeper: S,
    config: RunnerConfig,
    cancel: Option<&'a CancelToken>,
    state: RunnerState,
}

impl<'a, O, C, S, const N: usize> AnimationRunner<'a, O, C, S, N>
where
    O: OutputDriver,
    C: MonotonicClock,
    S: Sleeper,
{
    /// Create a new runner
    ///
    /// Fails if the duration or the step is zero, or if the step is longer
    /// than [`MAX_READING_GAP_MILLIS`].
    pub fn new(
        sky: &'a Sky<N>,
        output: O,
        clock: C,
        sleeper: S,
        config: RunnerConfig,
    ) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        Ok(Self {
            sky,
            output,
            clock,
            sleeper,
            config,
            cancel: None,
            state: RunnerState::Running,
        })
    }

    /// Stop the run early once `token` is cancelled
    #[must_use]
    pub fn with_cancel_token(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the animation to the end
    ///
    /// Blocks until the elapsed time reaches the configured duration or the
    /// cancel token is set. Frames are written in non-decreasing progress
    /// order, the last frame of a completed run is always progress 1.
    ///
    /// Elapsed time is the sum of forward deltas between consecutive clock
    /// readings. A reading behind the previous one adds nothing.
    pub fn run(&mut self) -> RunReport {
        self.state = RunnerState::Running;
        let mut last_reading = self.clock.now_millis();
        let mut total_millis = 0_u64;
        let mut frames = 0_u32;

        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationRunner.run] starting: duration {}ms, step {}ms",
            self.config.duration.as_millis(),
            self.config.step.as_millis()
        );

        loop {
            if self.is_cancelled() {
                #[cfg(feature = "esp32-log")]
                println!("[AnimationRunner.run] cancelled after {} frames", frames);
                return self.finish(RunOutcome::Cancelled, frames);
            }

            let now = self.clock.now_millis();
            total_millis =
                total_millis.saturating_add(u64::from(forward_millis(last_reading, now)));
            last_reading = now;

            let elapsed = Duration::from_millis(total_millis);
            let current = progress(elapsed, self.config.duration);

            let frame = self.sky.colors_at(current);
            self.output.write(&frame);
            frames = frames.saturating_add(1);

            #[cfg(feature = "esp32-log")]
            println!(
                "[AnimationRunner.run] frame {} at {}ms, progress {}",
                frames,
                elapsed.as_millis(),
                current
            );

            if elapsed >= self.config.duration {
                #[cfg(feature = "esp32-log")]
                println!("[AnimationRunner.run] completed after {} frames", frames);
                return self.finish(RunOutcome::Completed, frames);
            }

            self.sleeper.sleep(self.config.step);
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> RunnerState {
        self.state
    }

    pub const fn config(&self) -> RunnerConfig {
        self.config
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }

    fn finish(&mut self, outcome: RunOutcome, frames: u32) -> RunReport {
        self.state = RunnerState::Done;
        RunReport { outcome, frames }
    }
}
