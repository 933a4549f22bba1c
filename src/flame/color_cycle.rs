//! Palette cycling and the white flicker layer

use rand::{Rng, RngCore};

use super::FlameClock;
use crate::math::{sinf, wrap};

const COLOR_SPEED: f32 = 0.03;
const CANDLE_PHASE_STEP: f32 = 0.3;

const FLICKER_BASE: f32 = 0.15;
const FLICKER_JITTER: f32 = 0.02;
/// Upper bound of the white flicker layer
pub const FLICKER_MAX: f32 = 0.35;

/// (amplitude, frequency, per-candle phase step, offset multiplier)
const FLICKER_WAVES: [(f32, f32, f32, f32); 3] = [
    (0.12, 0.08, 0.3, 1.0),
    (0.08, 0.15, 0.5, 1.7),
    (0.05, 0.25, 0.7, 2.3),
];

/// Position in a `palette_len` palette and the blend towards the next entry.
///
/// The phase advances one palette entry every `2 / (0.03 * speed)` scaled
/// frames and wraps from the last entry back to the first.
pub fn color_phase(clock: &FlameClock, candle: usize, palette_len: usize) -> (f32, f32) {
    if palette_len == 0 {
        return (0.0, 0.0);
    }
    let raw = clock.t * COLOR_SPEED * clock.speed
        + candle as f32 * CANDLE_PHASE_STEP
        + clock.offset;
    let phase = wrap(raw / 2.0, palette_len as f32);
    (phase, phase - libm::floorf(phase))
}

/// White flash amount: three sines plus a little jitter, in `[0, 0.35]`
pub fn white_flicker<R: RngCore>(clock: &FlameClock, candle: usize, rng: &mut R) -> f32 {
    let waves: f32 = FLICKER_WAVES
        .iter()
        .map(|(amplitude, frequency, step, offset)| {
            amplitude * sinf(clock.t * frequency + candle as f32 * step + clock.offset * offset)
        })
        .sum();
    let jitter = rng.gen_range(-FLICKER_JITTER..=FLICKER_JITTER);
    (FLICKER_BASE + waves + jitter).clamp(0.0, FLICKER_MAX)
}
