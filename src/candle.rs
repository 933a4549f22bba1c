//! Per-candle state
//!
//! A plain record. Lifecycle changes are made by [`crate::menorah::Menorah`],
//! per-frame updates by the burn simulation and the flame engine.

use embassy_time::Instant;
use rand::{Rng, RngCore};

use crate::config::{AnimationConfig, BASE_MAX_LEDS, BurnConfig, LEDS_PER_STRIP};
use crate::math::TAU;

/// Per-LED flame profile slots (a flame can never be taller than the strip)
pub const FLAME_PROFILE_LEDS: usize = LEDS_PER_STRIP;

#[derive(Debug, Clone)]
pub struct Candle {
    /// Positioned for the current lighting session
    pub placed: bool,
    /// Flame is burning
    pub lit: bool,
    /// Shared burn timer start, stamped once every required candle is lit
    pub burn_start: Option<Instant>,
    /// Drawn once at ignition
    pub duration_minutes: Option<f32>,
    /// Visible base height (1..=5), shrinks as the candle burns
    pub base_leds: u8,
    /// Animated flame height this frame
    pub flame_leds: u8,
    /// Overall flame intensity this frame
    pub flame_brightness: f32,
    /// Flame height before animation, grows with burn progress
    pub target_flame_leds: f32,
    /// Flame brightness before the intensity curve, grows with burn progress
    pub target_flame_brightness: f32,
    /// Position in the flame palette, `[0, palette len)`
    pub color_phase: f32,
    /// Blend towards the next palette entry
    pub color_mix: f32,
    /// White flash layer, `[0, 0.35]`
    pub white_flicker: f32,
    pub animation_speed: f32,
    pub animation_phase_offset: f32,
    pub base_led_brightness: [f32; BASE_MAX_LEDS],
    pub flame_led_brightness: [f32; FLAME_PROFILE_LEDS],
}

impl Candle {
    /// Create an unplaced, unlit candle
    pub fn new(burn: &BurnConfig) -> Self {
        Self {
            placed: false,
            lit: false,
            burn_start: None,
            duration_minutes: None,
            base_leds: burn.base_leds,
            flame_leds: burn.flame_start_leds,
            flame_brightness: burn.flame_start_brightness,
            target_flame_leds: f32::from(burn.flame_start_leds),
            target_flame_brightness: burn.flame_start_brightness,
            color_phase: 0.0,
            color_mix: 0.0,
            white_flicker: 0.0,
            animation_speed: 1.0,
            animation_phase_offset: 0.0,
            base_led_brightness: [1.0; BASE_MAX_LEDS],
            flame_led_brightness: [1.0; FLAME_PROFILE_LEDS],
        }
    }

    /// Lit candle whose timer already ran out
    pub fn is_burnt_out(&self) -> bool {
        self.placed && !self.lit && self.burn_start.is_some()
    }

    /// Placed but still waiting for its flame
    pub fn is_waiting(&self) -> bool {
        self.placed && !self.lit && self.burn_start.is_none()
    }
}

/// Animation parameters drawn when a candle is reset for a lighting session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IgnitionDraw {
    pub speed: f32,
    pub phase_offset: f32,
}

impl IgnitionDraw {
    pub fn draw<R: RngCore>(rng: &mut R, config: &AnimationConfig) -> Self {
        let spread = config.speed_variation.abs();
        let variation = rng.gen_range(-spread..=spread);
        Self {
            speed: config.speed * (1.0 + variation),
            phase_offset: rng.gen_range(0.0..TAU),
        }
    }
}

/// Draw a burn duration: `min + uniform(0, variation) * min`
pub fn draw_duration<R: RngCore>(rng: &mut R, config: &BurnConfig) -> f32 {
    let variation = rng.gen_range(0.0..=config.duration_variation.abs());
    config.min_duration_minutes + variation * config.min_duration_minutes
}
