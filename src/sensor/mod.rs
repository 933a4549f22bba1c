//! Gesture / proximity sensor polling
//!
//! The sensor is an external collaborator. Reads are gated by a minimum poll
//! interval and a gesture cooldown. Failed reads count as "no input" for the
//! frame and are never retried synchronously.

mod proximity;
mod queue;

use core::fmt::Debug;

use embassy_time::{Duration, Instant};
use log::warn;

pub use proximity::ProximityHold;
pub use queue::{GestureQueue, QueueFull, QueuedSensor};

use crate::config::GestureConfig;
use crate::math::interval_elapsed;

const GESTURE_RAW_UP: u8 = 0x01;
const GESTURE_RAW_DOWN: u8 = 0x02;
const GESTURE_RAW_LEFT: u8 = 0x03;
const GESTURE_RAW_RIGHT: u8 = 0x04;

/// At most one sensor error line per this interval
const ERROR_LOG_INTERVAL: Duration = Duration::from_millis(1000);

/// Swipe direction reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Gesture {
    /// Map an APDS-9960 style gesture code; unknown codes read as `None`
    pub const fn from_raw(value: u8) -> Self {
        match value {
            GESTURE_RAW_UP => Self::Up,
            GESTURE_RAW_DOWN => Self::Down,
            GESTURE_RAW_LEFT => Self::Left,
            GESTURE_RAW_RIGHT => Self::Right,
            _ => Self::None,
        }
    }

    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Gesture and proximity sensor
///
/// Implement this trait to support different sensor drivers.
pub trait GestureSensor {
    type Error: Debug;

    /// Read the last completed gesture, `Gesture::None` when there is none
    fn read_gesture(&mut self) -> Result<Gesture, Self::Error>;

    /// Read proximity (0 = nothing near, 255 = touching)
    fn read_proximity(&mut self) -> Result<u8, Self::Error>;
}

/// Input collected for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorInput {
    pub gesture: Gesture,
    /// A proximity hold completed this frame
    pub proximity_hold: bool,
}

impl SensorInput {
    pub const fn gesture(gesture: Gesture) -> Self {
        Self {
            gesture,
            proximity_hold: false,
        }
    }
}

/// Polling state kept next to (not on) the sensor
#[derive(Debug, Clone)]
pub struct SensorPoller {
    cooldown: Duration,
    poll_interval: Duration,
    last_poll: Option<Instant>,
    last_gesture: Option<Instant>,
    last_error_log: Option<Instant>,
    proximity: ProximityHold,
}

impl SensorPoller {
    pub fn new(config: &GestureConfig, now: Instant) -> Self {
        Self {
            cooldown: config.cooldown,
            poll_interval: config.poll_interval,
            last_poll: None,
            last_gesture: Some(now),
            last_error_log: None,
            proximity: ProximityHold::new(config.proximity_threshold, config.proximity_hold),
        }
    }

    /// Poll the sensor if the poll interval allows it.
    ///
    /// Never fails: read errors are logged and reported as no input.
    pub fn poll<S: GestureSensor>(&mut self, sensor: &mut S, now: Instant) -> SensorInput {
        if !interval_elapsed(self.last_poll, now, self.poll_interval) {
            return SensorInput::default();
        }
        self.last_poll = Some(now);

        let proximity_hold = match sensor.read_proximity() {
            Ok(value) => self.proximity.update(value, now),
            Err(err) => {
                self.report("proximity", &err, now);
                false
            }
        };

        let mut gesture = Gesture::None;
        if interval_elapsed(self.last_gesture, now, self.cooldown) {
            match sensor.read_gesture() {
                Ok(read) if read.is_some() => {
                    self.last_gesture = Some(now);
                    gesture = read;
                }
                Ok(_) => {}
                Err(err) => self.report("gesture", &err, now),
            }
        }

        SensorInput {
            gesture,
            proximity_hold,
        }
    }

    fn report<E: Debug>(&mut self, what: &str, err: &E, now: Instant) {
        if interval_elapsed(self.last_error_log, now, ERROR_LOG_INTERVAL) {
            warn!("{} read failed: {:?}", what, err);
            self.last_error_log = Some(now);
        }
    }
}
