use super::{FlameAnimation, FlameClock};
use crate::math::{sinf, wrap};

const SPEED: f32 = 0.18;
const HEIGHT_PERIOD: f32 = 15.0;
const LED_PERIOD: f32 = 12.0;
const LED_SHIFT: f32 = 2.5;

/// Chaotic flicker from incommensurate sines, height 2-4
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaosAnimation;

impl FlameAnimation for ChaosAnimation {
    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let phase = wrap(clock.t * SPEED * clock.speed + clock.offset, HEIGHT_PERIOD);
        (0.8 * sinf(phase) + 0.6 * sinf(phase * 2.3)) / 2.0
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let phase = wrap(
            clock.t * SPEED * clock.speed - led as f32 * LED_SHIFT + clock.offset,
            LED_PERIOD,
        );
        (0.08 * sinf(phase) + 0.06 * sinf(phase * 2.1) + 0.04 * sinf(phase * 3.3)) / 3.0
    }
}
