use crate::color::{Color, Rgb};

/// Merge two colors with a weight
///
/// # Arguments
/// * `a` - Color returned for `ratio = 1`
/// * `b` - Color returned for `ratio = 0`
/// * `ratio` - Weight of `a`, not clamped
#[inline]
pub fn merge_weighted(a: Color, b: Color, ratio: f32) -> Color {
    Color {
        r: b.r + (a.r - b.r) * ratio,
        g: b.g + (a.g - b.g) * ratio,
        b: b.b + (a.b - b.b) * ratio,
    }
}

/// Multiply every channel by `factor`
#[inline]
pub fn scale_color(color: Color, factor: f32) -> Color {
    Color {
        r: color.r * factor,
        g: color.g * factor,
        b: color.b * factor,
    }
}

/// Convert a working color to the 8-bit output range
///
/// Channels are truncated toward zero and clamped to 0-255.
/// `NaN` channels become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_to_byte(color: Color) -> Rgb {
    // `as i32` truncates toward zero, saturates and maps NaN to 0
    let channel = |value: f32| (value as i32).clamp(0, 255) as u8;
    Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Lift an 8-bit color to the working representation
pub fn color_from_rgb(rgb: Rgb) -> Color {
    Color {
        r: f32::from(rgb.r),
        g: f32::from(rgb.g),
        b: f32::from(rgb.b),
    }
}

/// Create a working color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_precision_loss)]
pub const fn color_from_u32(color: u32) -> Color {
    Color {
        r: ((color >> 16) & 0xFF) as f32,
        g: ((color >> 8) & 0xFF) as f32,
        b: (color & 0xFF) as f32,
    }
}
