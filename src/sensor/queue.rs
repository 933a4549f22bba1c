//! Gesture queue for interrupt-driven sensor drivers
//!
//! A driver running in an interrupt or another task pushes gestures and
//! proximity readings; the frame loop drains them through [`QueuedSensor`].
//! Thread/interrupt safe via critical sections.

use core::cell::RefCell;
use core::convert::Infallible;

use critical_section::Mutex;
use heapless::Deque;

use super::{Gesture, GestureSensor};

/// Error returned when the queue has no room for another gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub Gesture);

struct QueueState<const SIZE: usize> {
    gestures: Deque<Gesture, SIZE>,
    proximity: u8,
}

/// A bounded gesture queue plus the latest proximity reading.
pub struct GestureQueue<const SIZE: usize> {
    inner: Mutex<RefCell<QueueState<SIZE>>>,
}

impl<const SIZE: usize> GestureQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(QueueState {
                gestures: Deque::new(),
                proximity: 0,
            })),
        }
    }

    /// Queue a gesture. `Gesture::None` is accepted and dropped.
    pub fn push(&self, gesture: Gesture) -> Result<(), QueueFull> {
        if !gesture.is_some() {
            return Ok(());
        }
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            state.gestures.push_back(gesture).map_err(QueueFull)
        })
    }

    /// Replace the latest proximity reading
    pub fn set_proximity(&self, proximity: u8) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().proximity = proximity;
        });
    }

    /// Oldest queued gesture, `Gesture::None` when empty
    pub fn pop(&self) -> Gesture {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            state.gestures.pop_front().unwrap_or_default()
        })
    }

    pub fn proximity(&self) -> u8 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().proximity)
    }

    /// Get a sensor view that drains this queue.
    pub const fn sensor(&self) -> QueuedSensor<'_, SIZE> {
        QueuedSensor { queue: self }
    }
}

impl<const SIZE: usize> Default for GestureQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`GestureSensor`] backed by a [`GestureQueue`]. Reads never fail.
#[derive(Clone, Copy)]
pub struct QueuedSensor<'a, const SIZE: usize> {
    queue: &'a GestureQueue<SIZE>,
}

impl<const SIZE: usize> GestureSensor for QueuedSensor<'_, SIZE> {
    type Error = Infallible;

    fn read_gesture(&mut self) -> Result<Gesture, Self::Error> {
        Ok(self.queue.pop())
    }

    fn read_proximity(&mut self) -> Result<u8, Self::Error> {
        Ok(self.queue.proximity())
    }
}
