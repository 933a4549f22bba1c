//! Bright pulses and flows moving up the flame

use super::{FLAME_SPAN, FlameAnimation, FlameClock};
use crate::math::{PI, cosf, sinf, wrap};

const PULSE_PERIOD: f32 = FLAME_SPAN * 4.0;
const PULSE_LED_SHIFT: f32 = 3.5;

const FLOW_PERIOD: f32 = FLAME_SPAN * 2.5;
const FLOW_HEIGHT_PERIOD: f32 = FLAME_SPAN * 3.0;
const FLOW_LED_SHIFT: f32 = 2.3;

/// Upward pulse, height 2-5. Only the bright half of each pulse is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseAnimation;

impl FlameAnimation for PulseAnimation {
    const MAX_RISE: f32 = 2.0;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        2.0 * sinf(clock.t * 0.15 + clock.offset)
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let position = wrap(clock.t * 0.25 * clock.speed + clock.offset, PULSE_PERIOD);
        let phase = wrap(position - led as f32 * PULSE_LED_SHIFT, PULSE_PERIOD);
        (0.15 * sinf(phase * 2.0 * PI / PULSE_PERIOD)).max(0.0)
    }
}

/// Steady upward flow, height 2-5
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowAnimation;

impl FlowAnimation {
    const SPEED: f32 = 0.16;
}

impl FlameAnimation for FlowAnimation {
    const MAX_RISE: f32 = 2.0;

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let phase = wrap(
            clock.t * Self::SPEED * clock.speed * 0.8 + clock.offset,
            FLOW_HEIGHT_PERIOD,
        );
        2.0 * sinf(phase * 2.0 * PI / FLOW_HEIGHT_PERIOD)
    }

    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32 {
        let position = wrap(clock.t * Self::SPEED * clock.speed + clock.offset, FLOW_PERIOD);
        let phase = wrap(position - led as f32 * FLOW_LED_SHIFT, FLOW_PERIOD);
        if phase < FLAME_SPAN {
            0.15 * (0.5 + 0.5 * cosf(phase * PI / FLAME_SPAN))
        } else {
            0.0
        }
    }
}
