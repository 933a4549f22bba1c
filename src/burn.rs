//! Burn-down simulation
//!
//! Drives base shrinkage, flame growth and burnout from the elapsed share of
//! each candle's drawn duration.

use embassy_time::Instant;
use log::info;

use crate::candle::Candle;
use crate::config::BurnConfig;
use crate::math::{ease, elapsed_minutes};

/// Intensity before the burn timer starts and at progress 0
pub const TAME_INTENSITY: f32 = 0.3;

/// Progress at which the flame is at its brightest
const PEAK_PROGRESS: f32 = 0.8;
const CURVE_EXPONENT: f32 = 1.5;

/// Progress thresholds where the base loses one LED: 5 → 4 → 3 → 2 → 1
const BASE_STEPS: [(f32, u8); 4] = [(0.20, 5), (0.40, 4), (0.60, 3), (0.80, 2)];

/// Fraction of `duration_minutes` that has elapsed.
///
/// A non-positive duration counts as already burnt out.
#[inline]
pub fn burn_progress(elapsed_minutes: f32, duration_minutes: f32) -> f32 {
    if duration_minutes > 0.0 {
        elapsed_minutes / duration_minutes
    } else {
        1.0
    }
}

/// Burn progress of a candle with a running timer
pub fn candle_progress(candle: &Candle, now: Instant) -> Option<f32> {
    let start = candle.burn_start?;
    let duration = candle.duration_minutes.unwrap_or(0.0);
    Some(burn_progress(elapsed_minutes(start, now), duration))
}

/// Tame start, peak at 80% of the burn, then simmer down to nothing.
pub fn intensity_curve(progress: f32) -> f32 {
    if progress <= 0.0 {
        return TAME_INTENSITY;
    }
    if progress >= 1.0 {
        return 0.0;
    }

    let intensity = if progress <= PEAK_PROGRESS {
        let rise = progress / PEAK_PROGRESS;
        TAME_INTENSITY + (1.0 - TAME_INTENSITY) * ease(rise, CURVE_EXPONENT)
    } else {
        let fall = (progress - PEAK_PROGRESS) / (1.0 - PEAK_PROGRESS);
        ease(1.0 - fall, CURVE_EXPONENT)
    };
    intensity.clamp(0.0, 1.0)
}

/// Visible base height for a burn progress
pub fn base_leds_for(progress: f32) -> u8 {
    BASE_STEPS
        .iter()
        .find(|(threshold, _)| progress < *threshold)
        .map_or(1, |(_, leds)| *leds)
}

/// Pre-animation flame height and brightness for a burn progress
pub fn target_flame(progress: f32, config: &BurnConfig) -> (f32, f32) {
    let growth = progress.clamp(0.0, 1.0);
    let start_leds = f32::from(config.flame_start_leds);
    let max_leds = f32::from(config.flame_max_leds);
    let leds = (start_leds + (max_leds - start_leds) * growth).min(max_leds);
    let brightness = (config.flame_start_brightness
        + (config.flame_max_brightness - config.flame_start_brightness) * growth)
        .min(config.flame_max_brightness);
    (leds, brightness)
}

/// Irreversibly put out a candle, leaving a single residual base LED
pub fn burn_out(candle: &mut Candle) {
    candle.lit = false;
    candle.flame_leds = 0;
    candle.flame_brightness = 0.0;
    candle.base_leds = 1;
}

/// Advance every burning candle to `now`.
///
/// Candles that are unlit or whose timer has not started are skipped.
/// Returns `true` when no tracked candle is still burning.
pub fn update(candles: &mut [Candle], now: Instant, config: &BurnConfig) -> bool {
    let mut all_burnt_out = true;

    for (index, candle) in candles.iter_mut().enumerate() {
        if !candle.lit {
            continue;
        }
        let Some(progress) = candle_progress(candle, now) else {
            continue;
        };

        if progress >= 1.0 {
            burn_out(candle);
            info!("candle {} burnt out", index);
            continue;
        }

        all_burnt_out = false;
        candle.base_leds = base_leds_for(progress).min(candle.base_leds);
        let (leds, brightness) = target_flame(progress, config);
        candle.target_flame_leds = leds;
        candle.target_flame_brightness = brightness;
    }

    all_burnt_out
}
