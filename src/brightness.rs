//! Global brightness presets
//!
//! While the candles burn, gestures step through a small ordered set of
//! brightness levels, wrapping at both ends.

/// Used when no presets are configured
const FALLBACK_LEVEL: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct BrightnessLevels {
    levels: &'static [f32],
    index: usize,
}

impl BrightnessLevels {
    /// Start at preset `index`, clamped into the table
    pub fn new(levels: &'static [f32], index: usize) -> Self {
        Self {
            levels,
            index: index.min(levels.len().saturating_sub(1)),
        }
    }

    /// Current brightness scalar
    pub fn current(&self) -> f32 {
        self.levels
            .get(self.index)
            .copied()
            .unwrap_or(FALLBACK_LEVEL)
            .clamp(0.0, 1.0)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next brighter preset, wrapping to the dimmest
    pub fn up(&mut self) -> f32 {
        if !self.levels.is_empty() {
            self.index = (self.index + 1) % self.levels.len();
        }
        self.current()
    }

    /// Step to the next dimmer preset, wrapping to the brightest
    pub fn down(&mut self) -> f32 {
        if !self.levels.is_empty() {
            self.index = self
                .index
                .checked_sub(1)
                .unwrap_or(self.levels.len() - 1);
        }
        self.current()
    }
}
