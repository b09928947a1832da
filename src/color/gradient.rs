use heapless::Vec;

use crate::color::{Color, merge_weighted};
use crate::error::InvalidConfiguration;

/// Maximum number of center-out stop colors accepted by [`mirrored_gradient`]
pub const MAX_STOPS: usize = 8;

const MAX_MIRRORED_STOPS: usize = MAX_STOPS * 2;

/// Color anchored at a fractional pixel position
///
/// The position is kept exact as `offset / (stops - 1)` pixels, where
/// `stops` is the number of mirrored stops. Pixel `p` is expressed in the
/// same unit as `p * (stops - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: usize,
    pub color: Color,
}

/// Build a mirrored gradient from stop colors ordered from the center outward
///
/// The stops are reflected onto both halves of the strip (`[c1, c2, c3]`
/// becomes `[c3, c2, c1, c1, c2, c3]`), spread evenly over `0..=N-1` and
/// linearly interpolated for every pixel in between.
pub fn mirrored_gradient<const N: usize>(
    stops: &[Color],
) -> Result<[Color; N], InvalidConfiguration> {
    let mut gradient = [Color::default(); N];
    fill_mirrored_gradient(&mut gradient, stops)?;
    Ok(gradient)
}

/// Fill `pixels` with the mirrored gradient of `stops`
///
/// Same as [`mirrored_gradient`] for strips whose length is only known at
/// runtime.
pub fn fill_mirrored_gradient(
    pixels: &mut [Color],
    stops: &[Color],
) -> Result<(), InvalidConfiguration> {
    let mirrored = mirror_stops(stops, pixels.len())?;
    let units_per_pixel = mirrored.len() - 1;

    for (pixel, color) in pixels.iter_mut().enumerate() {
        *color = color_at(&mirrored, pixel * units_per_pixel);
    }
    Ok(())
}

/// Reflect the stops and assign evenly spaced positions
fn mirror_stops(
    stops: &[Color],
    len: usize,
) -> Result<Vec<ColorStop, MAX_MIRRORED_STOPS>, InvalidConfiguration> {
    if stops.is_empty() {
        return Err(InvalidConfiguration::EmptyStops);
    }
    if stops.len() > MAX_STOPS {
        return Err(InvalidConfiguration::TooManyStops {
            count: stops.len(),
            max: MAX_STOPS,
        });
    }

    let last_pixel = len.saturating_sub(1);
    let mut mirrored = Vec::new();
    let colors = stops.iter().rev().chain(stops.iter());
    for (index, color) in colors.enumerate() {
        let stop = ColorStop {
            offset: index * last_pixel,
            color: *color,
        };
        // Capacity is checked above
        let _ = mirrored.push(stop);
    }

    Ok(mirrored)
}

/// Interpolate the color at `position` between its surrounding stops
///
/// `left` is the last stop at or before the position, `right` is the first
/// stop at or after it. A position sitting exactly on a stop uses ratio 1.
#[allow(clippy::cast_precision_loss)]
fn color_at(stops: &[ColorStop], position: usize) -> Color {
    let mut left = None;
    let mut right = None;
    for stop in stops {
        if stop.offset <= position {
            left = Some(stop);
        }
        if stop.offset >= position {
            right = Some(stop);
            break;
        }
    }

    match (left, right) {
        (Some(left), Some(right)) => {
            let distance = right.offset - left.offset;
            let ratio = if distance == 0 {
                1.0
            } else {
                (position - left.offset) as f32 / distance as f32
            };
            merge_weighted(left.color, right.color, ratio)
        }
        (Some(stop), None) | (None, Some(stop)) => stop.color,
        (None, None) => Color::default(),
    }
}
