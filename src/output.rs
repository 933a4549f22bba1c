//! LED strip output
//!
//! Strips are written for every candle first and latched together with a
//! single `show`, so all candles change on the same frame.

use core::fmt::Debug;

use log::warn;
use smart_leds::SmartLedsWrite;

use crate::StripOutput;
use crate::color::{OFF, Rgbw};
use crate::config::LEDS_PER_STRIP;

/// Physical channel order of the deployed strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgbw,
    /// Red and green swapped on the wire
    Grbw,
}

impl ChannelOrder {
    /// Reorder a logical color into wire order
    #[inline]
    pub const fn apply(self, color: Rgbw) -> Rgbw {
        match self {
            Self::Rgbw => color,
            Self::Grbw => Rgbw {
                r: color.g,
                g: color.r,
                b: color.b,
                a: color.a,
            },
        }
    }
}

/// [`StripOutput`] over one `smart-leds` driver per strip
pub struct SmartLedsOutput<D, const STRIPS: usize> {
    drivers: [D; STRIPS],
    order: ChannelOrder,
    staged: [[Rgbw; LEDS_PER_STRIP]; STRIPS],
}

impl<D, const STRIPS: usize> SmartLedsOutput<D, STRIPS>
where
    D: SmartLedsWrite,
    D::Color: From<Rgbw>,
    D::Error: Debug,
{
    /// `drivers[i]` drives the strip of candle `i`
    pub fn new(drivers: [D; STRIPS], order: ChannelOrder) -> Self {
        Self {
            drivers,
            order,
            staged: [[OFF; LEDS_PER_STRIP]; STRIPS],
        }
    }

    /// Staged (wire-order) colors for `strip`
    pub fn staged(&self, strip: usize) -> Option<&[Rgbw]> {
        self.staged.get(strip).map(|leds| leds.as_slice())
    }

    pub fn drivers(&self) -> &[D; STRIPS] {
        &self.drivers
    }
}

impl<D, const STRIPS: usize> StripOutput for SmartLedsOutput<D, STRIPS>
where
    D: SmartLedsWrite,
    D::Color: From<Rgbw>,
    D::Error: Debug,
{
    fn write(&mut self, strip: usize, colors: &[Rgbw]) {
        let Some(staged) = self.staged.get_mut(strip) else {
            return;
        };
        staged.fill(OFF);
        for (slot, color) in staged.iter_mut().zip(colors) {
            *slot = self.order.apply(*color);
        }
    }

    fn show(&mut self) {
        for (strip, (driver, leds)) in self.drivers.iter_mut().zip(&self.staged).enumerate() {
            if let Err(err) = driver.write(leds.iter().copied()) {
                warn!("strip {} write failed: {:?}", strip, err);
            }
        }
    }
}
