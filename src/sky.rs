//! Sunrise animation model
//!
//! A [`Sky`] is built once from two sets of center-out stop colors and is
//! only queried afterwards. Every query returns a fresh frame for the given
//! progress.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{
    Color, Rgb, merge_weighted, mirrored_gradient, normalize_to_byte, scale_color,
};
use crate::error::InvalidConfiguration;
use crate::luminosity::{LuminosityProfile, clamp_progress};

/// One complete set of output colors, one per pixel
pub type Frame<const N: usize> = [Rgb; N];

/// Precomputed state of a single pixel
#[derive(Debug, Clone, Copy, PartialEq)]
struct SkyPixel {
    start: Color,
    end: Color,
    luminosity: f32,
}

/// Immutable sunrise model for a strip of `N` pixels
#[derive(Debug, Clone)]
pub struct Sky<const N: usize> {
    pixels: [SkyPixel; N],
    profile: LuminosityProfile,
}

impl<const N: usize> Sky<N> {
    /// Create a sky with the default luminosity profile
    ///
    /// # Arguments
    /// * `start_stops` - Center-out colors shown at the beginning
    /// * `end_stops` - Center-out colors reached at the end
    pub fn new(
        start_stops: &[Color],
        end_stops: &[Color],
    ) -> Result<Self, InvalidConfiguration> {
        Self::with_profile(start_stops, end_stops, LuminosityProfile::new())
    }

    /// Create a sky with a custom luminosity profile
    pub fn with_profile(
        start_stops: &[Color],
        end_stops: &[Color],
        profile: LuminosityProfile,
    ) -> Result<Self, InvalidConfiguration> {
        let start = mirrored_gradient::<N>(start_stops)?;
        let end = mirrored_gradient::<N>(end_stops)?;
        let luminosity = profile.spatial::<N>();

        #[cfg(feature = "esp32-log")]
        println!(
            "[Sky.with_profile] {} pixels, {} start stops, {} end stops",
            N,
            start_stops.len(),
            end_stops.len()
        );

        Ok(Self {
            pixels: core::array::from_fn(|i| SkyPixel {
                start: start[i],
                end: end[i],
                luminosity: luminosity[i],
            }),
            profile,
        })
    }

    /// Compute the frame for the given progress
    ///
    /// Progress 0 is the start gradient at zero brightness, progress 1 is
    /// the end gradient at full brightness. Values outside 0-1 are clamped.
    pub fn colors_at(&self, progress: f32) -> Frame<N> {
        let progress = clamp_progress(progress);
        let brightness = self.profile.temporal(progress);

        core::array::from_fn(|i| {
            let pixel = &self.pixels[i];
            let color = merge_weighted(pixel.end, pixel.start, progress);
            let scaled = scale_color(scale_color(color, brightness), pixel.luminosity);
            normalize_to_byte(scaled)
        })
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Luminosity profile used by this sky
    pub const fn profile(&self) -> LuminosityProfile {
        self.profile
    }

    /// Start gradient, before any brightness shaping
    pub fn start_gradient(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|pixel| pixel.start)
    }

    /// End gradient, before any brightness shaping
    pub fn end_gradient(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|pixel| pixel.end)
    }

    /// Spatial luminosity multiplier of every pixel
    pub fn luminosity(&self) -> impl Iterator<Item = f32> + '_ {
        self.pixels.iter().map(|pixel| pixel.luminosity)
    }
}
