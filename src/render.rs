//! Candle state to per-LED colors
//!
//! Rendering only reads candle state. Every buffer is cleared first, so an
//! unplaced candle comes out fully dark.

use crate::bounds::StripSegments;
use crate::candle::Candle;
use crate::color::{OFF, Rgbw, blend_colors, flicker, scale_color, taper};
use crate::config::ColorConfig;

/// Base brightness relative to the flame while the candle burns
const LIT_BASE_FRACTION: f32 = 0.4;
/// Base brightness of a placed candle without a flame
const UNLIT_BASE_FRACTION: f32 = 0.3;
/// Brightness lost from the bottom to the top of the flame segment
const FLAME_GRADIENT_DROP: f32 = 0.4;

/// Blended palette color with the white flicker layered on top
pub fn flame_color(candle: &Candle, colors: &ColorConfig) -> Rgbw {
    let palette = &colors.flame_palette;
    let len = palette.len();
    let current = (candle.color_phase.max(0.0) as usize) % len;
    let next = (current + 1) % len;
    let blended = blend_colors(palette[current], palette[next], candle.color_mix);
    flicker(blended, colors.flicker, candle.white_flicker)
}

/// Render one candle into `leds` (index 0 is the bottom of the strip)
pub fn render_candle(candle: &Candle, colors: &ColorConfig, level: f32, leds: &mut [Rgbw]) {
    leds.fill(OFF);

    if !candle.placed {
        return;
    }

    if !candle.lit {
        let color = scale_color(colors.base, colors.base_brightness * UNLIT_BASE_FRACTION * level);
        let segments = StripSegments::new(candle.base_leds, 0, leds.len());
        leds[segments.base].fill(color);
        return;
    }

    let segments = StripSegments::new(candle.base_leds, candle.flame_leds, leds.len());

    let base_scale = colors.base_brightness * LIT_BASE_FRACTION * level;
    for (i, led) in leds[segments.base.clone()].iter_mut().enumerate() {
        let multiplier = candle.base_led_brightness.get(i).copied().unwrap_or(1.0);
        *led = scale_color(colors.base, base_scale * multiplier);
    }

    let color = flame_color(candle, colors);
    let count = segments.flame_len();
    for (i, led) in leds[segments.flame].iter_mut().enumerate() {
        let gradient = taper(i, count, FLAME_GRADIENT_DROP);
        let multiplier = candle.flame_led_brightness.get(i).copied().unwrap_or(1.0);
        *led = scale_color(color, candle.flame_brightness * gradient * multiplier * level);
    }
}

/// Show the selected night as a count of lit LEDs
pub fn render_night_indicator(night: u8, color: Rgbw, level: f32, leds: &mut [Rgbw]) {
    leds.fill(OFF);
    let lit = usize::from(night).min(leds.len());
    leds[..lit].fill(scale_color(color, level));
}
