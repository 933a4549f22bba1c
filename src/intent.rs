//! Intent interpretation
//!
//! The same swipe means different things in different phases. This module
//! turns frame input into a menorah-level intent.

use crate::phase::Phase;
use crate::sensor::{Gesture, SensorInput};

/// Requested change to the menorah state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenorahIntent {
    /// Select the next night, wrapping 8 → 1
    NextNight,
    /// Select the previous night, wrapping 1 → 8
    PreviousNight,
    /// Accept the selected night and start lighting
    ConfirmNight,
    /// Light the next placed candle
    IgniteNext,
    /// Step to a brighter preset
    BrightnessUp,
    /// Step to a dimmer preset
    BrightnessDown,
    /// Start a new lighting session after everything burnt out
    Rekindle,
}

/// Intent for a gesture in `phase`, if the phase uses it
pub const fn from_gesture(phase: Phase, gesture: Gesture) -> Option<MenorahIntent> {
    match (phase, gesture) {
        (Phase::Selection, Gesture::Up) => Some(MenorahIntent::NextNight),
        (Phase::Selection, Gesture::Down) => Some(MenorahIntent::PreviousNight),
        (Phase::Selection, Gesture::Right) => Some(MenorahIntent::ConfirmNight),
        (Phase::Lighting, Gesture::Up | Gesture::Down) => Some(MenorahIntent::IgniteNext),
        (Phase::Burning, Gesture::Up) => Some(MenorahIntent::BrightnessUp),
        (Phase::Burning, Gesture::Down) => Some(MenorahIntent::BrightnessDown),
        _ => None,
    }
}

/// Intent for a full frame of input
pub const fn interpret(phase: Phase, input: SensorInput) -> Option<MenorahIntent> {
    if input.proximity_hold && matches!(phase, Phase::Extinguished) {
        return Some(MenorahIntent::Rekindle);
    }
    from_gesture(phase, input.gesture)
}
