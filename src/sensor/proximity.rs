use embassy_time::{Duration, Instant};
use log::debug;

use crate::math::interval_elapsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoldState {
    Idle,
    Detecting { since: Instant },
    /// Hold fired; waiting for the hand to leave
    Latched,
}

/// Detects a hand held over the sensor for a minimum time
#[derive(Debug, Clone)]
pub struct ProximityHold {
    threshold: u8,
    hold: Duration,
    state: HoldState,
}

impl ProximityHold {
    pub const fn new(threshold: u8, hold: Duration) -> Self {
        Self {
            threshold,
            hold,
            state: HoldState::Idle,
        }
    }

    /// Feed a proximity reading.
    ///
    /// Returns `true` exactly once per hold, on the reading that completes it.
    pub fn update(&mut self, proximity: u8, now: Instant) -> bool {
        if proximity < self.threshold {
            if self.state != HoldState::Idle {
                debug!("proximity released");
            }
            self.state = HoldState::Idle;
            return false;
        }

        match self.state {
            HoldState::Idle => {
                self.state = HoldState::Detecting { since: now };
                false
            }
            HoldState::Detecting { since } => {
                if interval_elapsed(Some(since), now, self.hold) {
                    self.state = HoldState::Latched;
                    true
                } else {
                    false
                }
            }
            HoldState::Latched => false,
        }
    }

    /// Hand currently near the sensor
    pub fn is_present(&self) -> bool {
        self.state != HoldState::Idle
    }
}
