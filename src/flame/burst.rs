//! Random bright spots rising through the flame

use heapless::Vec;
use rand::{Rng, RngCore};

use super::{FLAME_SPAN, FlameAnimation, FlameClock};
use crate::math::{PI, cosf, sinf};

/// Maximum bursts in flight at once
const MAX_BURSTS: usize = 4;
/// A spawn roll happens every this many frames
const SPAWN_EVERY: u32 = 25;
const SPAWN_CHANCE: f64 = 0.2;
const RISE_PER_FRAME: f32 = 0.18;
/// Bursts disappear once they are this far above the base
const VANISH_AT: f32 = FLAME_SPAN + 3.0;
/// LEDs closer than this to a burst are brightened
const REACH: f32 = 1.5;
const BOOST: f32 = 0.2;
/// Extra flame height for each burst still inside the nominal flame
const HEIGHT_BOOST: f32 = 0.8;

/// Random bursts, height 2-4
#[derive(Debug, Clone, Default)]
pub struct BurstAnimation {
    /// Height of each burst above the base, in LEDs
    positions: Vec<f32, MAX_BURSTS>,
}

impl BurstAnimation {
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Bursts currently in flight
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }
}

impl FlameAnimation for BurstAnimation {
    const PEAK: f32 = 1.2;

    fn advance<R: RngCore>(&mut self, clock: &FlameClock, rng: &mut R) {
        if clock.frame % SPAWN_EVERY == 0 && rng.gen_bool(SPAWN_CHANCE) {
            // Full: the roll is simply lost
            let _ = self.positions.push(0.0);
        }

        let rise = RISE_PER_FRAME * clock.speed;
        for position in self.positions.iter_mut() {
            *position += rise;
        }
        self.positions.retain(|position| *position < VANISH_AT);
    }

    fn height_variation(&self, clock: &FlameClock) -> f32 {
        let inside = self
            .positions
            .iter()
            .filter(|position| **position < FLAME_SPAN)
            .count();
        inside as f32 * HEIGHT_BOOST + 0.5 * sinf(clock.t * 0.08 + clock.offset)
    }

    fn led_variation(&self, led: usize, _clock: &FlameClock) -> f32 {
        self.positions
            .iter()
            .map(|position| libm::fabsf(led as f32 - position))
            .filter(|distance| *distance < REACH)
            .map(|distance| BOOST * (0.5 + 0.5 * cosf(distance * PI / REACH)))
            .sum()
    }

    fn reset(&mut self) {
        self.positions.clear();
    }
}
