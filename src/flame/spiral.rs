use super::{FLAME_SPAN, FlameAnimation, FlameClock};
use crate::math::{TAU, sinf, wrap};

const SPEED: f32 = 0.15;
const LED_PERIOD: f32 = FLAME_SPAN * 3.5;
const HEIGHT_PERIOD: f32 = FLAME_SPAN * 4.0;
const LED_SHIFT: f32 = 2.8;

/// Rotating brightness pattern, height 2-4
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralAnimation;

impl FlameAnimation for SpiralAnimation {
    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let phase = wrap(clock.t * SPEED * clock.speed * 0.7 + clock.offset, HEIGHT_PERIOD);
        sinf(phase * TAU / HEIGHT_PERIOD)
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let position = wrap(clock.t * SPEED * clock.speed + clock.offset, LED_PERIOD);
        let phase = wrap(position - led as f32 * LED_SHIFT, LED_PERIOD);
        0.15 * sinf(phase * TAU / LED_PERIOD)
    }
}
