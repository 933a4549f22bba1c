use core::ops::Range;

/// Base and flame ranges of one candle strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripSegments {
    /// Static wax LEDs at the bottom of the strip
    pub base: Range<usize>,
    /// Animated LEDs directly above the base
    pub flame: Range<usize>,
}

impl StripSegments {
    /// Lay out `base_leds` then `flame_leds` from the bottom, clipped to `strip_len`
    pub fn new(base_leds: u8, flame_leds: u8, strip_len: usize) -> Self {
        let base_end = usize::from(base_leds).min(strip_len);
        let flame_end = (base_end + usize::from(flame_leds)).min(strip_len);
        Self {
            base: 0..base_end,
            flame: base_end..flame_end,
        }
    }

    /// Get the number of visible flame LEDs
    pub fn flame_len(&self) -> usize {
        self.flame.len()
    }
}
