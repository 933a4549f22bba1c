//! Flame animation with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `FlameAnimation` trait; the shared parts
//! (palette cycling, white flicker, taper, clamping) live in [`animate`].

mod burst;
mod chaos;
mod color_cycle;
mod layered;
mod pulse;
mod spiral;
mod wave;

use embassy_time::Instant;
use rand::RngCore;

pub use burst::BurstAnimation;
pub use chaos::ChaosAnimation;
pub use color_cycle::{color_phase, white_flicker};
pub use layered::LayeredAnimation;
pub use pulse::{FlowAnimation, PulseAnimation};
pub use spiral::SpiralAnimation;
pub use wave::{DoubleWaveAnimation, RippleAnimation, WaveAnimation};

use crate::burn::{TAME_INTENSITY, candle_progress, intensity_curve};
use crate::candle::{Candle, FLAME_PROFILE_LEDS};
use crate::color::taper;
use crate::config::{AnimationConfig, AnimationMode, CANDLE_COUNT};
use crate::math::round_clamped;

/// Nominal flame height the wave geometry is laid out for
pub(crate) const FLAME_SPAN: f32 = 3.0;

/// A flame is never shorter than this
const MIN_FLAME_LEDS: u8 = 2;
/// Per-LED brightness never drops below this
const PROFILE_FLOOR: f32 = 0.4;
/// Brightness lost from the bottom to the top of the flame
const PROFILE_TAPER: f32 = 0.5;

const ANIMATION_NAME_WAVE: &str = "wave";
const ANIMATION_NAME_PULSE: &str = "pulse";
const ANIMATION_NAME_BURSTS: &str = "bursts";
const ANIMATION_NAME_RIPPLE: &str = "ripple";
const ANIMATION_NAME_DOUBLE_WAVE: &str = "double_wave";
const ANIMATION_NAME_CHAOS: &str = "chaos";
const ANIMATION_NAME_FLOW: &str = "flow";
const ANIMATION_NAME_SPIRAL: &str = "spiral";
const ANIMATION_NAME_LAYERED: &str = "layered";

const ANIMATION_ID_WAVE: u8 = 1;
const ANIMATION_ID_PULSE: u8 = 2;
const ANIMATION_ID_BURSTS: u8 = 3;
const ANIMATION_ID_RIPPLE: u8 = 4;
const ANIMATION_ID_DOUBLE_WAVE: u8 = 5;
const ANIMATION_ID_CHAOS: u8 = 6;
const ANIMATION_ID_FLOW: u8 = 7;
const ANIMATION_ID_SPIRAL: u8 = 8;
const ANIMATION_ID_LAYERED: u8 = 9;

/// Number of selectable animations
pub const ANIMATION_COUNT: usize = 9;

/// Timing inputs of a single animation frame
#[derive(Debug, Clone, Copy)]
pub struct FlameClock {
    /// Raw frame counter
    pub frame: u32,
    /// Frame counter scaled by the candle's speed
    pub t: f32,
    /// Per-candle speed multiplier
    pub speed: f32,
    /// Per-candle phase offset (radians)
    pub offset: f32,
}

impl FlameClock {
    pub fn new(frame: u32, speed: f32, offset: f32) -> Self {
        Self {
            frame,
            t: frame as f32 * speed,
            speed,
            offset,
        }
    }
}

pub trait FlameAnimation {
    /// How many LEDs above the base height the flame may reach
    const MAX_RISE: f32 = 1.0;

    /// Upper clamp of a single LED's brightness multiplier
    const PEAK: f32 = 1.15;

    /// Advance internal state by one frame
    fn advance<R: RngCore>(&mut self, _clock: &FlameClock, _rng: &mut R) {}

    /// Signed change to the flame height this frame
    fn height_variation(&self, clock: &FlameClock) -> f32;

    /// Additive brightness change for flame LED `led` (0 = just above the base)
    fn led_variation(&self, led: usize, clock: &FlameClock) -> f32;

    /// Reset animation state
    fn reset(&mut self) {}
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Gentle sine wave traveling upward
    Wave(WaveAnimation),
    /// Bright pulses traveling upward
    Pulse(PulseAnimation),
    /// Random bright spots rising through the flame
    Bursts(BurstAnimation),
    /// Slow wave with several peaks
    Ripple(RippleAnimation),
    /// Two offset waves
    DoubleWave(DoubleWaveAnimation),
    /// Several incommensurate sines
    Chaos(ChaosAnimation),
    /// Continuous upward flow
    Flow(FlowAnimation),
    /// Rotating brightness pattern
    Spiral(SpiralAnimation),
    /// Slow wave and fast pulse combined
    Layered(LayeredAnimation),
}

/// Known animation ids, numbered 1-9
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Wave = ANIMATION_ID_WAVE,
    Pulse = ANIMATION_ID_PULSE,
    Bursts = ANIMATION_ID_BURSTS,
    Ripple = ANIMATION_ID_RIPPLE,
    DoubleWave = ANIMATION_ID_DOUBLE_WAVE,
    Chaos = ANIMATION_ID_CHAOS,
    Flow = ANIMATION_ID_FLOW,
    Spiral = ANIMATION_ID_SPIRAL,
    Layered = ANIMATION_ID_LAYERED,
}

impl Default for AnimationSlot {
    fn default() -> Self {
        AnimationId::Chaos.to_slot()
    }
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_WAVE => Self::Wave,
            ANIMATION_ID_PULSE => Self::Pulse,
            ANIMATION_ID_BURSTS => Self::Bursts,
            ANIMATION_ID_RIPPLE => Self::Ripple,
            ANIMATION_ID_DOUBLE_WAVE => Self::DoubleWave,
            ANIMATION_ID_CHAOS => Self::Chaos,
            ANIMATION_ID_FLOW => Self::Flow,
            ANIMATION_ID_SPIRAL => Self::Spiral,
            ANIMATION_ID_LAYERED => Self::Layered,
            _ => return None,
        })
    }

    /// Showcase assignment: candle `index` runs animation `(index mod 9) + 1`
    pub fn for_candle(index: usize) -> Self {
        let raw = (index % ANIMATION_COUNT) as u8 + 1;
        Self::from_raw(raw).unwrap_or(Self::Wave)
    }

    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::Wave => AnimationSlot::Wave(WaveAnimation),
            Self::Pulse => AnimationSlot::Pulse(PulseAnimation),
            Self::Bursts => AnimationSlot::Bursts(BurstAnimation::new()),
            Self::Ripple => AnimationSlot::Ripple(RippleAnimation),
            Self::DoubleWave => AnimationSlot::DoubleWave(DoubleWaveAnimation),
            Self::Chaos => AnimationSlot::Chaos(ChaosAnimation),
            Self::Flow => AnimationSlot::Flow(FlowAnimation),
            Self::Spiral => AnimationSlot::Spiral(SpiralAnimation),
            Self::Layered => AnimationSlot::Layered(LayeredAnimation),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wave => ANIMATION_NAME_WAVE,
            Self::Pulse => ANIMATION_NAME_PULSE,
            Self::Bursts => ANIMATION_NAME_BURSTS,
            Self::Ripple => ANIMATION_NAME_RIPPLE,
            Self::DoubleWave => ANIMATION_NAME_DOUBLE_WAVE,
            Self::Chaos => ANIMATION_NAME_CHAOS,
            Self::Flow => ANIMATION_NAME_FLOW,
            Self::Spiral => ANIMATION_NAME_SPIRAL,
            Self::Layered => ANIMATION_NAME_LAYERED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_WAVE => Some(Self::Wave),
            ANIMATION_NAME_PULSE => Some(Self::Pulse),
            ANIMATION_NAME_BURSTS => Some(Self::Bursts),
            ANIMATION_NAME_RIPPLE => Some(Self::Ripple),
            ANIMATION_NAME_DOUBLE_WAVE => Some(Self::DoubleWave),
            ANIMATION_NAME_CHAOS => Some(Self::Chaos),
            ANIMATION_NAME_FLOW => Some(Self::Flow),
            ANIMATION_NAME_SPIRAL => Some(Self::Spiral),
            ANIMATION_NAME_LAYERED => Some(Self::Layered),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Wave(_) => AnimationId::Wave,
            Self::Pulse(_) => AnimationId::Pulse,
            Self::Bursts(_) => AnimationId::Bursts,
            Self::Ripple(_) => AnimationId::Ripple,
            Self::DoubleWave(_) => AnimationId::DoubleWave,
            Self::Chaos(_) => AnimationId::Chaos,
            Self::Flow(_) => AnimationId::Flow,
            Self::Spiral(_) => AnimationId::Spiral,
            Self::Layered(_) => AnimationId::Layered,
        }
    }

    /// Animate one frame of `candle`, never taller than `max_leds`
    pub fn animate<R: RngCore>(
        &mut self,
        candle: &mut Candle,
        clock: &FlameClock,
        max_leds: u8,
        rng: &mut R,
    ) {
        match self {
            Self::Wave(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Pulse(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Bursts(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Ripple(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::DoubleWave(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Chaos(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Flow(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Spiral(animation) => shape_flame(animation, candle, clock, max_leds, rng),
            Self::Layered(animation) => shape_flame(animation, candle, clock, max_leds, rng),
        }
    }

    /// Reset the animation state
    pub fn reset(&mut self) {
        match self {
            Self::Wave(animation) => FlameAnimation::reset(animation),
            Self::Pulse(animation) => FlameAnimation::reset(animation),
            Self::Bursts(animation) => FlameAnimation::reset(animation),
            Self::Ripple(animation) => FlameAnimation::reset(animation),
            Self::DoubleWave(animation) => FlameAnimation::reset(animation),
            Self::Chaos(animation) => FlameAnimation::reset(animation),
            Self::Flow(animation) => FlameAnimation::reset(animation),
            Self::Spiral(animation) => FlameAnimation::reset(animation),
            Self::Layered(animation) => FlameAnimation::reset(animation),
        }
    }
}

/// Flame height and per-LED profile for one frame
fn shape_flame<A: FlameAnimation, R: RngCore>(
    animation: &mut A,
    candle: &mut Candle,
    clock: &FlameClock,
    max_leds: u8,
    rng: &mut R,
) {
    animation.advance(clock, rng);

    let base = candle.target_flame_leds;
    let ceiling = max_leds.min(FLAME_PROFILE_LEDS as u8);
    let max_height = round_clamped(base + A::MAX_RISE, MIN_FLAME_LEDS, ceiling);
    let height = round_clamped(
        base + animation.height_variation(clock),
        MIN_FLAME_LEDS,
        max_height,
    );
    candle.flame_leds = height;

    let height = usize::from(height);
    for (led, brightness) in candle.flame_led_brightness.iter_mut().enumerate() {
        *brightness = if led < height {
            let profile = taper(led, height, PROFILE_TAPER) + animation.led_variation(led, clock);
            profile.clamp(PROFILE_FLOOR, A::PEAK)
        } else {
            1.0
        };
    }
}

/// Per-candle animation state for the whole menorah
#[derive(Debug, Clone)]
pub struct FlameEngine {
    config: AnimationConfig,
    palette_len: usize,
    max_flame_leds: u8,
    slots: [AnimationSlot; CANDLE_COUNT],
}

impl FlameEngine {
    /// Animated flames never grow past `max_flame_leds`
    pub fn new(config: AnimationConfig, palette_len: usize, max_flame_leds: u8) -> Self {
        let mut engine = Self {
            config,
            palette_len,
            max_flame_leds,
            slots: core::array::from_fn(|_| AnimationSlot::default()),
        };
        engine.reset();
        engine
    }

    /// Animation assigned to candle `index`
    pub fn select(&self, index: usize) -> AnimationId {
        match self.config.mode {
            AnimationMode::Showcase => AnimationId::for_candle(index),
            AnimationMode::Uniform(id) => id,
        }
    }

    /// Reassign every slot and drop transient state such as bursts
    pub fn reset(&mut self) {
        for index in 0..CANDLE_COUNT {
            let mut slot = self.select(index).to_slot();
            slot.reset();
            self.slots[index] = slot;
        }
    }

    pub fn slot(&self, index: usize) -> Option<&AnimationSlot> {
        self.slots.get(index)
    }

    /// Animate one frame of a lit candle. Unlit candles and unknown
    /// indices are left untouched.
    pub fn animate<R: RngCore>(
        &mut self,
        index: usize,
        candle: &mut Candle,
        frame: u32,
        now: Instant,
        rng: &mut R,
    ) {
        if !candle.lit {
            return;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        let intensity = candle_progress(candle, now).map_or(TAME_INTENSITY, intensity_curve);
        let clock = FlameClock::new(frame, candle.animation_speed, candle.animation_phase_offset);

        let (phase, mix) = color_phase(&clock, index, self.palette_len);
        candle.color_phase = phase;
        candle.color_mix = mix;
        candle.white_flicker = white_flicker(&clock, index, rng);
        candle.flame_brightness = candle.target_flame_brightness * intensity;

        slot.animate(candle, &clock, self.max_flame_leds, rng);
    }
}
