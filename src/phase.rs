//! Phases of a lighting session and the helpers they use

use heapless::Vec;

use crate::config::{LightingOrder, NIGHT_CANDLES};

/// Number of selectable nights
pub const NIGHTS: u8 = NIGHT_CANDLES as u8;

/// Selection → Lighting → Burning → Extinguished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing how many candles tonight
    Selection,
    /// Candles placed, waiting for gestures to light them one by one
    Lighting,
    /// Every required candle lit, timers running
    Burning,
    /// Every candle burnt out
    Extinguished,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Lighting => "lighting",
            Self::Burning => "burning",
            Self::Extinguished => "extinguished",
        }
    }
}

/// Night count in `1..=8` that wraps at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightSelector {
    night: u8,
}

impl NightSelector {
    /// Out-of-range nights are clamped into `1..=8`
    pub fn new(night: u8) -> Self {
        Self {
            night: night.clamp(1, NIGHTS),
        }
    }

    pub const fn night(self) -> u8 {
        self.night
    }

    pub fn next(&mut self) -> u8 {
        self.night = self.night % NIGHTS + 1;
        self.night
    }

    pub fn previous(&mut self) -> u8 {
        self.night = if self.night <= 1 { NIGHTS } else { self.night - 1 };
        self.night
    }
}

/// Candle indices to light for `nights`, in ignition order
pub fn lighting_sequence(nights: u8, order: LightingOrder) -> Vec<usize, NIGHT_CANDLES> {
    let count = usize::from(nights).min(NIGHT_CANDLES);
    let mut sequence = Vec::new();
    for step in 0..count {
        let index = match order {
            LightingOrder::Forward => step,
            LightingOrder::Reverse => count - 1 - step,
        };
        // Cannot overflow: count <= capacity
        let _ = sequence.push(index);
    }
    sequence
}
