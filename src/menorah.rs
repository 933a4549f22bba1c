use embassy_time::Instant;
use heapless::Vec;
use log::{debug, info};
use rand::RngCore;

use crate::brightness::BrightnessLevels;
use crate::burn;
use crate::candle::{Candle, IgnitionDraw, draw_duration};
use crate::color::{OFF, Rgbw};
use crate::config::{
    CANDLE_COUNT, LEDS_PER_STRIP, MenorahConfig, NIGHT_CANDLES, SHAMASH_INDEX, Startup,
};
use crate::flame::FlameEngine;
use crate::intent::{self, MenorahIntent};
use crate::math::interval_elapsed;
use crate::phase::{NightSelector, Phase, lighting_sequence};
use crate::render::{render_candle, render_night_indicator};
use crate::sensor::SensorInput;

/// Colors of one candle strip, bottom LED first
pub type StripFrame = [Rgbw; LEDS_PER_STRIP];

/// Colors of every strip, indexed by candle (the shamash is last)
pub type MenorahFrame = [StripFrame; CANDLE_COUNT];

/// The menorah - owns the candles and drives the phases
pub struct Menorah<R: RngCore> {
    // Configuration and injected randomness
    config: MenorahConfig,
    rng: R,

    // Session state
    phase: Phase,
    selector: NightSelector,
    sequence: Vec<usize, NIGHT_CANDLES>,
    lit_in_sequence: usize,
    last_ignition: Option<Instant>,
    brightness: BrightnessLevels,
    candles: [Candle; CANDLE_COUNT],
    frame: u32,

    // Internal dependencies
    flames: FlameEngine,
    frame_buffer: MenorahFrame,
}

impl<R: RngCore> Menorah<R> {
    /// Create the menorah in its startup phase
    pub fn new(config: MenorahConfig, rng: R, now: Instant) -> Self {
        let candles = core::array::from_fn(|_| Candle::new(&config.burn));
        let mut menorah = Self {
            rng,
            phase: Phase::Selection,
            selector: NightSelector::new(config.default_night),
            sequence: Vec::new(),
            lit_in_sequence: 0,
            last_ignition: None,
            brightness: BrightnessLevels::new(config.brightness_levels, config.brightness_index),
            candles,
            frame: 0,
            flames: FlameEngine::new(
                config.animation,
                config.colors.flame_palette.len(),
                config.burn.flame_max_leds,
            ),
            frame_buffer: [[OFF; LEDS_PER_STRIP]; CANDLE_COUNT],
            config,
        };

        if menorah.config.startup == Startup::Showcase {
            menorah.start_showcase(now);
        } else {
            info!(
                "phase: {} (night {})",
                menorah.phase.as_str(),
                menorah.selector.night()
            );
        }
        menorah
    }

    pub fn config(&self) -> &MenorahConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently selected night (1-8)
    pub fn night(&self) -> u8 {
        self.selector.night()
    }

    pub fn candles(&self) -> &[Candle; CANDLE_COUNT] {
        &self.candles
    }

    /// Candle at `index`, `None` when out of range
    pub fn candle(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// Ignition order of the current session
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Current global brightness scalar
    pub fn brightness(&self) -> f32 {
        self.brightness.current()
    }

    pub fn flames(&self) -> &FlameEngine {
        &self.flames
    }

    /// Last rendered frame
    pub fn frame(&self) -> &MenorahFrame {
        &self.frame_buffer
    }

    /// Process one frame
    ///
    /// Applies the frame's input, advances the active phase, and renders
    /// every strip into the frame buffer.
    pub fn tick(&mut self, now: Instant, input: SensorInput) -> &MenorahFrame {
        if let Some(intent) = intent::interpret(self.phase, input) {
            self.handle(intent, now);
        }

        self.frame = self.frame.wrapping_add(1);
        match self.phase {
            Phase::Selection | Phase::Extinguished => {}
            Phase::Lighting => self.animate(now),
            Phase::Burning => {
                let all_burnt_out = burn::update(&mut self.candles, now, &self.config.burn);
                self.animate(now);
                if all_burnt_out {
                    info!("all candles burnt out");
                    self.enter(Phase::Extinguished);
                }
            }
        }

        self.render();
        &self.frame_buffer
    }

    /// Apply an intent. Intents that do not fit the current phase are ignored.
    pub fn handle(&mut self, intent: MenorahIntent, now: Instant) {
        match (self.phase, intent) {
            (Phase::Selection, MenorahIntent::NextNight) => {
                let night = self.selector.next();
                debug!("night: {}", night);
            }
            (Phase::Selection, MenorahIntent::PreviousNight) => {
                let night = self.selector.previous();
                debug!("night: {}", night);
            }
            (Phase::Selection, MenorahIntent::ConfirmNight) => {
                self.begin_lighting(self.selector.night(), now);
            }
            (Phase::Lighting, MenorahIntent::IgniteNext) => {
                self.ignite_next(now);
            }
            (Phase::Burning, MenorahIntent::BrightnessUp) => {
                let level = self.brightness.up();
                debug!("brightness: {}", level);
            }
            (Phase::Burning, MenorahIntent::BrightnessDown) => {
                let level = self.brightness.down();
                debug!("brightness: {}", level);
            }
            (Phase::Extinguished, MenorahIntent::Rekindle) => {
                info!("rekindle (night {})", self.selector.night());
                self.enter(Phase::Selection);
            }
            _ => {}
        }
    }

    /// Enter the lighting phase for `nights` candles.
    ///
    /// Resets every candle, lights the shamash right away and places the
    /// night candles in lighting order.
    pub fn begin_lighting(&mut self, nights: u8, now: Instant) {
        self.reset_candles();

        self.sequence = lighting_sequence(nights, self.config.lighting_order);
        for &index in &self.sequence {
            self.candles[index].placed = true;
        }
        self.lit_in_sequence = 0;
        self.last_ignition = Some(now);

        let shamash = &mut self.candles[SHAMASH_INDEX];
        shamash.placed = true;
        shamash.lit = true;
        shamash.duration_minutes = Some(self.config.burn.min_duration_minutes);

        info!("placed {} candles + shamash", self.sequence.len());
        self.enter(Phase::Lighting);

        if self.sequence.is_empty() {
            self.start_burn(now);
        }
    }

    /// Light the next placed candle, at most once per ignition interval.
    ///
    /// Returns the candle index that was lit.
    pub fn ignite_next(&mut self, now: Instant) -> Option<usize> {
        if self.phase != Phase::Lighting {
            return None;
        }
        if !interval_elapsed(self.last_ignition, now, self.config.gestures.ignition_interval) {
            return None;
        }
        let index = *self.sequence.get(self.lit_in_sequence)?;

        let duration = draw_duration(&mut self.rng, &self.config.burn);
        let candle = &mut self.candles[index];
        candle.lit = true;
        candle.duration_minutes = Some(duration);
        self.lit_in_sequence += 1;
        self.last_ignition = Some(now);
        debug!(
            "candle {} lit ({}/{}), duration {} min",
            index,
            self.lit_in_sequence,
            self.sequence.len(),
            duration
        );

        if self.lit_in_sequence == self.sequence.len() {
            self.start_burn(now);
        }
        Some(index)
    }

    /// Stamp one shared burn start on every lit candle
    fn start_burn(&mut self, now: Instant) {
        for candle in self.candles.iter_mut().filter(|candle| candle.lit) {
            candle.burn_start = Some(now);
        }
        info!("burn timer started");
        self.enter(Phase::Burning);
    }

    /// Light all candles at once and start burning (diagnostic startup)
    pub fn start_showcase(&mut self, now: Instant) {
        self.reset_candles();
        self.sequence.clear();
        for index in 0..CANDLE_COUNT {
            let duration = if index == SHAMASH_INDEX {
                self.config.burn.min_duration_minutes
            } else {
                draw_duration(&mut self.rng, &self.config.burn)
            };
            let candle = &mut self.candles[index];
            candle.placed = true;
            candle.lit = true;
            candle.duration_minutes = Some(duration);
            debug!(
                "candle {}: {} ({} min)",
                index,
                self.flames.select(index).as_str(),
                duration
            );
        }
        info!("showcase: all candles lit");
        self.start_burn(now);
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        info!("phase: {}", phase.as_str());
    }

    /// Clear every candle and draw fresh animation parameters
    fn reset_candles(&mut self) {
        for candle in &mut self.candles {
            let draw = IgnitionDraw::draw(&mut self.rng, &self.config.animation);
            *candle = Candle::new(&self.config.burn);
            candle.animation_speed = draw.speed;
            candle.animation_phase_offset = draw.phase_offset;
        }
        self.flames.reset();
    }

    fn animate(&mut self, now: Instant) {
        for (index, candle) in self.candles.iter_mut().enumerate() {
            self.flames
                .animate(index, candle, self.frame, now, &mut self.rng);
        }
    }

    fn render(&mut self) {
        let level = self.brightness.current();
        let colors = &self.config.colors;

        if self.phase == Phase::Selection {
            for strip in &mut self.frame_buffer {
                strip.fill(OFF);
            }
            render_night_indicator(
                self.selector.night(),
                colors.selection,
                level,
                &mut self.frame_buffer[SHAMASH_INDEX],
            );
            return;
        }

        for (candle, strip) in self.candles.iter().zip(self.frame_buffer.iter_mut()) {
            render_candle(candle, colors, level, strip);
        }
    }
}
