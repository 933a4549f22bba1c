//! Slow wave layered under a faster pulse

use super::{FLAME_SPAN, FlameAnimation, FlameClock};
use crate::math::{TAU, sinf, wrap};

const SLOW_SPEED: f32 = 0.08;
const SLOW_PERIOD: f32 = FLAME_SPAN * 2.5;
const SLOW_LED_SHIFT: f32 = 2.2;

const FAST_SPEED: f32 = 0.22;
const FAST_PERIOD: f32 = FLAME_SPAN * 3.5;
const FAST_LED_SHIFT: f32 = 3.2;
const FAST_OFFSET_SCALE: f32 = 1.5;

/// Multi-layer combination, height 2-5
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredAnimation;

impl FlameAnimation for LayeredAnimation {
    const MAX_RISE: f32 = 2.0;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let slow = 1.2 * sinf(clock.t * SLOW_SPEED * clock.speed * 0.5 + clock.offset);
        let fast = 1.6
            * sinf(clock.t * FAST_SPEED * clock.speed * 0.7 + clock.offset * FAST_OFFSET_SCALE);
        (slow + fast) / 2.0
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let led = led as f32;
        let slow = wrap(clock.t * SLOW_SPEED * clock.speed + clock.offset, SLOW_PERIOD);
        let fast = wrap(
            clock.t * FAST_SPEED * clock.speed + clock.offset * FAST_OFFSET_SCALE,
            FAST_PERIOD,
        );
        let slow = 0.08 * sinf(wrap(slow - led * SLOW_LED_SHIFT, SLOW_PERIOD) * TAU / SLOW_PERIOD);
        let fast = 0.1 * sinf(wrap(fast - led * FAST_LED_SHIFT, FAST_PERIOD) * TAU / FAST_PERIOD);
        (slow + fast) / 2.0
    }
}
