//! Sine waves traveling up the flame

use super::{FLAME_SPAN, FlameAnimation, FlameClock};
use crate::math::{PI, sinf, wrap};

const WAVE_PERIOD: f32 = FLAME_SPAN * 2.5;
const WAVE_LED_SHIFT: f32 = 2.2;

const RIPPLE_PERIOD: f32 = FLAME_SPAN * 5.0;
const RIPPLE_LED_SHIFT: f32 = 4.5;

/// Brightness of a wave of `period` at `position`, `led` steps down the flame
#[inline]
fn traveling(position: f32, led: usize, shift: f32, period: f32, amplitude: f32) -> f32 {
    let phase = wrap(position - led as f32 * shift, period);
    amplitude * sinf(phase * 2.0 * PI / period)
}

/// Smooth upward wave, height 2-4
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveAnimation;

impl WaveAnimation {
    const SPEED: f32 = 0.12;

    fn position(clock: &FlameClock) -> f32 {
        wrap(clock.t * Self::SPEED * clock.speed + clock.offset, WAVE_PERIOD)
    }
}

impl FlameAnimation for WaveAnimation {
    const PEAK: f32 = 1.1;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        sinf(clock.t * 0.1 + clock.offset)
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        traveling(Self::position(clock), led, WAVE_LED_SHIFT, WAVE_PERIOD, 0.1)
    }
}

/// Slow ripple with several peaks, height 2-4
#[derive(Debug, Clone, Copy, Default)]
pub struct RippleAnimation;

impl FlameAnimation for RippleAnimation {
    const PEAK: f32 = 1.12;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        sinf(clock.t * 0.08 + clock.offset)
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let position = wrap(clock.t * 0.1 * clock.speed + clock.offset, RIPPLE_PERIOD);
        traveling(position, led, RIPPLE_LED_SHIFT, RIPPLE_PERIOD, 0.12)
    }
}

/// Two waves a little over a third of a period apart, height 2-4
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleWaveAnimation;

impl DoubleWaveAnimation {
    const SPEED: f32 = 0.14;
    const SECOND_WAVE_LEAD: f32 = FLAME_SPAN * 1.2;
}

impl FlameAnimation for DoubleWaveAnimation {
    const PEAK: f32 = 1.1;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let angle = clock.t * 0.12 + clock.offset;
        (sinf(angle) + sinf(angle + PI / 2.0)) / 2.0
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let base = clock.t * Self::SPEED * clock.speed + clock.offset;
        let first = wrap(base, WAVE_PERIOD);
        let second = wrap(base + Self::SECOND_WAVE_LEAD, WAVE_PERIOD);
        (traveling(first, led, WAVE_LED_SHIFT, WAVE_PERIOD, 0.1)
            + traveling(second, led, WAVE_LED_SHIFT, WAVE_PERIOD, 0.1))
            / 2.0
    }
}
