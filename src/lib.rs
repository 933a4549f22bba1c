#![no_std]

pub mod bounds;
pub mod brightness;
pub mod burn;
pub mod candle;
pub mod color;
pub mod config;
pub mod flame;
pub mod frame_scheduler;
pub mod intent;
pub mod math;
pub mod menorah;
pub mod output;
pub mod phase;
pub mod render;
pub mod sensor;

pub use candle::Candle;
pub use config::{
    AnimationConfig, AnimationMode, BurnConfig, CANDLE_COUNT, ColorConfig, GestureConfig,
    LEDS_PER_STRIP, LightingOrder, MenorahConfig, NIGHT_CANDLES, SHAMASH_INDEX, Startup,
};
pub use flame::{AnimationId, AnimationSlot, FlameEngine};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent::MenorahIntent;
pub use menorah::{Menorah, MenorahFrame, StripFrame};
pub use output::{ChannelOrder, SmartLedsOutput};
pub use phase::Phase;
pub use sensor::{Gesture, GestureQueue, GestureSensor, SensorInput, SensorPoller};

pub use color::{Hsv, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip output
///
/// Implement this trait to support different hardware platforms.
/// Strips are addressed by candle index; nothing is visible until `show`.
pub trait StripOutput {
    /// Stage colors for one strip (index 0 is the bottom LED)
    fn write(&mut self, strip: usize, colors: &[Rgbw]);

    /// Latch every staged strip at once
    fn show(&mut self);
}
