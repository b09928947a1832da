//! Canonical sunrise preset
//!
//! A 16 pixel strip going from a violet/pink dawn to a warm yellow morning
//! in five minutes.

use embassy_time::Duration;

use crate::color::{Color, color_from_u32};

/// Number of pixels on the reference strip
pub const DEFAULT_PIXEL_COUNT: usize = 16;

/// Total sunrise duration
pub const DEFAULT_DURATION: Duration = Duration::from_secs(300);

/// Pause between two frames
pub const DEFAULT_STEP: Duration = Duration::from_millis(250);

/// Create a stop list from hex colors (0xRRGGBB format)
macro_rules! hex_stops {
    ($($color:expr),*) => {
        [
            $(color_from_u32($color)),*
        ]
    };
}

/// Dawn colors, center outward: amber, pink, violet
#[allow(clippy::unreadable_literal)]
pub const SUNRISE_START_STOPS: [Color; 3] = hex_stops![
    0xFFB03B, // (255, 176, 59)
    0xE372AD, // (227, 114, 173)
    0x9084DB  // (144, 132, 219)
];

/// Morning colors, center outward: golden yellow, pale yellow
#[allow(clippy::unreadable_literal)]
pub const SUNRISE_END_STOPS: [Color; 2] = hex_stops![
    0xFFB73B, // (255, 183, 59)
    0xFFBE5A  // (255, 190, 90)
];

/// Single warm sunrise tone, usable as a uniform one-stop gradient
#[allow(clippy::unreadable_literal)]
pub const SUNRISE_COLOR: Color = color_from_u32(0xFBAB17);
