//! Brightness shaping
//!
//! The sunrise brightness is the product of two multipliers:
//! - a spatial curve, fixed per pixel, brightest in the middle of the strip
//! - a temporal ramp, shared by all pixels, growing with the progress

/// Default spatial peak before clipping
///
/// Values above 1 flatten the top of the parabola into a small plateau.
pub const DEFAULT_PEAK: f32 = 1.1;

/// Default temporal easing exponent (cubic)
pub const DEFAULT_EXPONENT: f32 = 3.0;

/// Parameters of the spatial and temporal brightness curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminosityProfile {
    /// Value of the parabola at the strip center, before clipping to 1
    pub peak: f32,
    /// Exponent applied to the progress
    pub exponent: f32,
}

impl Default for LuminosityProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LuminosityProfile {
    pub const fn new() -> Self {
        Self {
            peak: DEFAULT_PEAK,
            exponent: DEFAULT_EXPONENT,
        }
    }

    /// Per-pixel multipliers for a strip of `N` pixels
    ///
    /// Parabola centered on the strip, clipped above at 1. Values near the
    /// ends are not clamped from below and may be negative on short strips.
    #[allow(clippy::cast_precision_loss)]
    pub fn spatial<const N: usize>(&self) -> [f32; N] {
        if N <= 1 {
            return [1.0; N];
        }

        let midpoint = (N - 1) as f32 / 2.0;
        let spread = midpoint * midpoint;
        core::array::from_fn(|i| {
            let offset = i as f32 - midpoint;
            (self.peak - offset * offset / spread).min(1.0)
        })
    }

    /// Uniform multiplier for the given progress
    ///
    /// `progress` is clamped to 0-1, so the result is 0 at the start and
    /// 1 at the end of the animation.
    pub fn temporal(&self, progress: f32) -> f32 {
        libm::powf(clamp_progress(progress), self.exponent)
    }
}

/// Spatial curve with the default profile
pub fn spatial_curve<const N: usize>() -> [f32; N] {
    LuminosityProfile::new().spatial::<N>()
}

/// Temporal multiplier with the default profile (`progress^3`)
pub fn temporal_multiplier(progress: f32) -> f32 {
    LuminosityProfile::new().temporal(progress)
}

/// Clamp progress to 0-1, `NaN` counts as the start
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
