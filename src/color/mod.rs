mod gradient;
mod utils;

use smart_leds::{RGB, RGB8};

pub use gradient::{ColorStop, MAX_STOPS, fill_mirrored_gradient, mirrored_gradient};
pub use utils::{
    color_from_rgb, color_from_u32, merge_weighted, normalize_to_byte, scale_color,
};

/// 8-bit color pushed to the strip
pub type Rgb = RGB8;

/// Floating-point working color, channels are not bounded
pub type Color = RGB<f32>;
