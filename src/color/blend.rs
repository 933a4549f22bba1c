use smart_leds::White;

use crate::color::{Rgbw, rgbw};

#[inline]
fn lerp_channel(a: u8, b: u8, mix: f32) -> u8 {
    (f32::from(a) * (1.0 - mix) + f32::from(b) * mix) as u8
}

#[inline]
fn scale_channel(value: u8, scale: f32) -> u8 {
    (f32::from(value) * scale) as u8
}

/// Blend two RGBW colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `mix` - Blend factor (0.0 = all a, 1.0 = all b), clamped
#[inline]
pub fn blend_colors(a: Rgbw, b: Rgbw, mix: f32) -> Rgbw {
    let mix = mix.clamp(0.0, 1.0);
    Rgbw {
        r: lerp_channel(a.r, b.r, mix),
        g: lerp_channel(a.g, b.g, mix),
        b: lerp_channel(a.b, b.b, mix),
        a: White(lerp_channel(a.a.0, b.a.0, mix)),
    }
}

/// Layer a white flash of strength `amount` over a flame color
#[inline]
pub fn flicker(base: Rgbw, white: Rgbw, amount: f32) -> Rgbw {
    blend_colors(base, white, amount)
}

/// Scale every channel by `scale`, truncating to the 0-255 range.
///
/// Negative scales give black; channels saturate at 255.
#[inline]
pub fn scale_color(color: Rgbw, scale: f32) -> Rgbw {
    let scale = scale.max(0.0);
    Rgbw {
        r: scale_channel(color.r, scale),
        g: scale_channel(color.g, scale),
        b: scale_channel(color.b, scale),
        a: White(scale_channel(color.a.0, scale)),
    }
}

/// Linear brightness taper along a segment of `count` LEDs.
///
/// Index 0 gets 1.0, the last index gets `1.0 - drop`.
#[inline]
pub fn taper(index: usize, count: usize, drop: f32) -> f32 {
    let span = count.saturating_sub(1).max(1) as f32;
    1.0 - index as f32 * drop / span
}

/// Create an RGBW color from a u32 value (0xRRGGBBWW format)
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    rgbw(
        ((color >> 24) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
