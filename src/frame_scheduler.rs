//! Frame pacing for the menorah loop
//!
//! One tick polls the sensor, advances the menorah and latches every strip.
//! Sleeping between ticks is left to the caller's platform.

use embassy_time::{Duration, Instant};
use rand::RngCore;

use crate::StripOutput;
use crate::menorah::Menorah;
use crate::sensor::{GestureSensor, SensorPoller};

/// Timing returned by [`FrameScheduler::tick`]
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next frame is due
    pub next_deadline: Instant,
}

impl FrameResult {
    /// How long to wait from `now` until the next frame (zero if behind schedule).
    pub fn sleep_from(&self, now: Instant) -> Duration {
        // Both measured from the clock epoch
        frame_sleep(
            Duration::from_ticks(self.next_deadline.as_ticks()),
            Duration::from_ticks(now.as_ticks()),
        )
    }
}

/// Sleep needed to stretch a frame that took `elapsed` to `frame_duration`
pub fn frame_sleep(frame_duration: Duration, elapsed: Duration) -> Duration {
    if elapsed >= frame_duration {
        Duration::from_ticks(0)
    } else {
        frame_duration - elapsed
    }
}

/// Drives a [`Menorah`] at its configured frame rate.
///
/// Each tick writes all nine strips and then calls `show` once, so every
/// candle changes on the same frame.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(menorah, queue.sensor(), output, Instant::now());
/// loop {
///     let result = scheduler.tick(Instant::now());
///     delay.delay_ms(result.sleep_from(Instant::now()).as_millis() as u32);
/// }
/// ```
pub struct FrameScheduler<S: GestureSensor, O: StripOutput, R: RngCore> {
    sensor: S,
    output: O,
    poller: SensorPoller,
    menorah: Menorah<R>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<S: GestureSensor, O: StripOutput, R: RngCore> FrameScheduler<S, O, R> {
    /// Pace `menorah` by its configured frame duration, starting at `now`
    pub fn new(menorah: Menorah<R>, sensor: S, output: O, now: Instant) -> Self {
        let config = menorah.config();
        let poller = SensorPoller::new(&config.gestures, now);
        let frame_duration = config.frame_duration;
        Self {
            sensor,
            output,
            poller,
            menorah,
            next_frame: now,
            frame_duration,
        }
    }

    /// Run one frame at `now`.
    ///
    /// A scheduler more than two frames late restarts its deadline from
    /// `now` rather than rendering a burst of catch-up frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let input = self.poller.poll(&mut self.sensor, now);
        let frame = self.menorah.tick(now, input);
        for (strip, leds) in frame.iter().enumerate() {
            self.output.write(strip, leds);
        }
        self.output.show();

        self.next_frame += self.frame_duration;
        FrameResult {
            next_deadline: self.next_frame,
        }
    }

    /// Run forever: tick, then sleep out the rest of the frame.
    pub fn run(&mut self, mut clock: impl FnMut() -> Instant, mut sleep: impl FnMut(Duration)) -> ! {
        loop {
            let result = self.tick(clock());
            sleep(result.sleep_from(clock()));
        }
    }

    pub fn menorah(&self) -> &Menorah<R> {
        &self.menorah
    }

    pub fn menorah_mut(&mut self) -> &mut Menorah<R> {
        &mut self.menorah
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
