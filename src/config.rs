//! Startup configuration for the menorah
//!
//! Every tunable is a plain field with a deployed default, there is no
//! runtime loading.

use embassy_time::Duration;

use crate::color::{Rgbw, rgbw};
use crate::flame::AnimationId;

/// LEDs on each candle strip
pub const LEDS_PER_STRIP: usize = 8;
/// Regular (night) candles
pub const NIGHT_CANDLES: usize = 8;
/// Night candles plus the shamash
pub const CANDLE_COUNT: usize = NIGHT_CANDLES + 1;
/// Candle slot (and strip id) of the shamash
pub const SHAMASH_INDEX: usize = NIGHT_CANDLES;
/// Highest base LED count a candle starts with
pub const BASE_MAX_LEDS: usize = 5;

/// Brightness presets cycled by gestures while burning
pub const DEFAULT_BRIGHTNESS_LEVELS: &[f32] = &[0.01, 0.06, 0.20, 0.50, 0.99];

/// Burn timing and candle geometry
#[derive(Debug, Clone, Copy)]
pub struct BurnConfig {
    /// Shortest burn; the shamash always uses exactly this
    pub min_duration_minutes: f32,
    /// Extra duration fraction drawn uniformly from `0..=variation`
    pub duration_variation: f32,
    /// Base LEDs of a fresh candle
    pub base_leds: u8,
    /// Flame height right after ignition
    pub flame_start_leds: u8,
    /// Flame height at the end of the burn
    pub flame_max_leds: u8,
    pub flame_start_brightness: f32,
    pub flame_max_brightness: f32,
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            min_duration_minutes: 2.0,
            duration_variation: 0.10,
            base_leds: 5,
            flame_start_leds: 3,
            flame_max_leds: 5,
            flame_start_brightness: 0.50,
            flame_max_brightness: 0.80,
        }
    }
}

/// Which flame animation each candle runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Candle `i` runs animation `(i mod 9) + 1`
    Showcase,
    /// Every candle runs the same animation
    Uniform(AnimationId),
}

#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    pub mode: AnimationMode,
    /// Global speed multiplier (1.0 = normal)
    pub speed: f32,
    /// Per-candle speed spread: `speed * (1 ± variation)`
    pub speed_variation: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Uniform(AnimationId::Chaos),
            speed: 0.5,
            speed_variation: 0.2,
        }
    }
}

/// Logical RGBW colors; physical channel order is handled by the output
#[derive(Debug, Clone, Copy)]
pub struct ColorConfig {
    /// Wax color of the candle base
    pub base: Rgbw,
    /// Base brightness relative to the flame
    pub base_brightness: f32,
    /// Night indicator color on the shamash during selection
    pub selection: Rgbw,
    /// Flame palette, cycled in order
    pub flame_palette: [Rgbw; 3],
    /// White flicker layer
    pub flicker: Rgbw,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            base: rgbw(10, 10, 255, 10),
            base_brightness: 0.80,
            selection: rgbw(255, 50, 5, 180),
            flame_palette: [
                rgbw(255, 5, 5, 50),   // red
                rgbw(255, 30, 5, 80),  // orange
                rgbw(255, 70, 5, 120), // yellow
            ],
            flicker: rgbw(150, 100, 50, 255),
        }
    }
}

/// Sensor gating
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Minimum time between two accepted gestures
    pub cooldown: Duration,
    /// Minimum time between two sensor polls
    pub poll_interval: Duration,
    /// Minimum time between two candle ignitions
    pub ignition_interval: Duration,
    /// Proximity reading that counts as "hand present"
    pub proximity_threshold: u8,
    /// How long the hand must stay to count as a hold
    pub proximity_hold: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(500),
            poll_interval: Duration::from_millis(20),
            ignition_interval: Duration::from_millis(1000),
            proximity_threshold: 10,
            proximity_hold: Duration::from_millis(3000),
        }
    }
}

/// Order in which placed night candles are lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingOrder {
    Forward,
    Reverse,
}

/// What the menorah does right after power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// Start with night selection
    NightSelection,
    /// Light every candle at once and go straight to burning
    Showcase,
}

/// Configuration for the menorah
#[derive(Debug, Clone)]
pub struct MenorahConfig {
    pub startup: Startup,
    pub burn: BurnConfig,
    pub animation: AnimationConfig,
    pub colors: ColorConfig,
    pub gestures: GestureConfig,
    pub lighting_order: LightingOrder,
    pub brightness_levels: &'static [f32],
    pub brightness_index: usize,
    /// Night shown when selection starts (1-8)
    pub default_night: u8,
    /// Target frame period
    pub frame_duration: Duration,
}

impl Default for MenorahConfig {
    fn default() -> Self {
        Self {
            startup: Startup::NightSelection,
            burn: BurnConfig::default(),
            animation: AnimationConfig::default(),
            colors: ColorConfig::default(),
            gestures: GestureConfig::default(),
            lighting_order: LightingOrder::Reverse,
            brightness_levels: DEFAULT_BRIGHTNESS_LEVELS,
            brightness_index: 2,
            default_night: 4,
            frame_duration: Duration::from_millis(20),
        }
    }
}
