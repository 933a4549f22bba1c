mod tests {
    use embassy_time::Instant;
    use menorah_light_composer::flame::{
        ANIMATION_COUNT, BurstAnimation, FlameAnimation, FlameClock, color_phase,
    };
    use menorah_light_composer::{
        AnimationConfig, AnimationId, AnimationMode, BurnConfig, CANDLE_COUNT, Candle, FlameEngine,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    const ALL_IDS: [AnimationId; ANIMATION_COUNT] = [
        AnimationId::Wave,
        AnimationId::Pulse,
        AnimationId::Bursts,
        AnimationId::Ripple,
        AnimationId::DoubleWave,
        AnimationId::Chaos,
        AnimationId::Flow,
        AnimationId::Spiral,
        AnimationId::Layered,
    ];

    fn showcase_engine() -> FlameEngine {
        let config = AnimationConfig {
            mode: AnimationMode::Showcase,
            ..AnimationConfig::default()
        };
        FlameEngine::new(config, 3, 5)
    }

    fn lit_candle() -> Candle {
        let mut candle = Candle::new(&BurnConfig::default());
        candle.placed = true;
        candle.lit = true;
        candle.animation_speed = 0.5;
        candle.animation_phase_offset = 1.0;
        candle
    }

    #[test]
    fn test_animation_id_from_raw() {
        for (raw, id) in (1u8..).zip(ALL_IDS) {
            assert_eq!(AnimationId::from_raw(raw), Some(id));
            assert_eq!(id as u8, raw);
        }
        assert_eq!(AnimationId::from_raw(0), None);
        assert_eq!(AnimationId::from_raw(10), None);
    }

    #[test]
    fn test_animation_id_names() {
        for id in ALL_IDS {
            assert_eq!(AnimationId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(id.to_slot().id(), id);
        }
        assert_eq!(AnimationId::Chaos.as_str(), "chaos");
        assert_eq!(AnimationId::parse_from_str("double_wave"), Some(AnimationId::DoubleWave));
        assert_eq!(AnimationId::parse_from_str("candle"), None);
    }

    #[test]
    fn test_showcase_assignment() {
        assert_eq!(AnimationId::for_candle(0), AnimationId::Wave);
        assert_eq!(AnimationId::for_candle(5), AnimationId::Chaos);
        assert_eq!(AnimationId::for_candle(8), AnimationId::Layered);
        assert_eq!(AnimationId::for_candle(9), AnimationId::Wave);

        let engine = showcase_engine();
        for index in 0..CANDLE_COUNT {
            assert_eq!(engine.select(index), ALL_IDS[index]);
            assert_eq!(engine.slot(index).map(|slot| slot.id()), Some(ALL_IDS[index]));
        }
        assert!(engine.slot(CANDLE_COUNT).is_none());
    }

    #[test]
    fn test_uniform_assignment() {
        let engine = FlameEngine::new(AnimationConfig::default(), 3, 5);
        for index in 0..CANDLE_COUNT {
            assert_eq!(engine.select(index), AnimationId::Chaos);
        }
    }

    #[test]
    fn test_every_animation_stays_in_bounds() {
        let mut engine = showcase_engine();
        let mut rng = SmallRng::seed_from_u64(42);
        let now = Instant::from_millis(0);

        for index in 0..CANDLE_COUNT {
            let mut candle = lit_candle();
            for frame in 0..600 {
                engine.animate(index, &mut candle, frame, now, &mut rng);

                let id = ALL_IDS[index];
                let height = usize::from(candle.flame_leds);
                assert!((2..=5).contains(&height), "{} height {}", id.as_str(), height);
                for (led, value) in candle.flame_led_brightness.iter().enumerate() {
                    if led < height {
                        assert!(
                            (0.4..=1.2).contains(value),
                            "{} led {} = {}",
                            id.as_str(),
                            led,
                            value
                        );
                    } else {
                        assert_eq!(*value, 1.0);
                    }
                }
                assert!((0.0..=0.35).contains(&candle.white_flicker));
                assert!((0.0..3.0).contains(&candle.color_phase));
                assert!((0.0..1.0).contains(&candle.color_mix));
            }
        }
    }

    #[test]
    fn test_late_burn_flame_respects_max_leds() {
        let config = BurnConfig::default();
        let mut engine = showcase_engine();
        let mut rng = SmallRng::seed_from_u64(9);
        // 110 s of a 2 min burn
        let now = Instant::from_millis(110_000);

        for index in 0..CANDLE_COUNT {
            let mut candle = lit_candle();
            candle.base_leds = 1;
            candle.burn_start = Some(Instant::from_millis(0));
            candle.duration_minutes = Some(2.0);
            candle.target_flame_leds = 4.83;
            candle.target_flame_brightness = 0.8;

            let mut tallest = 0;
            for frame in 0..2000 {
                engine.animate(index, &mut candle, frame, now, &mut rng);
                tallest = tallest.max(candle.flame_leds);
                assert!(
                    (2..=config.flame_max_leds).contains(&candle.flame_leds),
                    "{} height {}",
                    ALL_IDS[index].as_str(),
                    candle.flame_leds
                );
            }
            assert_eq!(tallest, config.flame_max_leds, "{}", ALL_IDS[index].as_str());
        }
    }

    #[test]
    fn test_tame_intensity_before_timer() {
        let mut engine = showcase_engine();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut candle = lit_candle();

        engine.animate(0, &mut candle, 10, Instant::from_millis(0), &mut rng);
        assert!((candle.flame_brightness - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_peak_intensity_at_eighty_percent() {
        let mut engine = showcase_engine();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut candle = lit_candle();
        candle.burn_start = Some(Instant::from_millis(0));
        candle.duration_minutes = Some(2.0);

        engine.animate(0, &mut candle, 10, Instant::from_millis(96_000), &mut rng);
        assert!((candle.flame_brightness - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_unlit_candle_is_untouched() {
        let mut engine = showcase_engine();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut candle = Candle::new(&BurnConfig::default());
        candle.placed = true;
        let before = candle.clone();

        engine.animate(3, &mut candle, 10, Instant::from_millis(0), &mut rng);
        assert_eq!(candle.flame_leds, before.flame_leds);
        assert_eq!(candle.flame_brightness, before.flame_brightness);
        assert_eq!(candle.white_flicker, before.white_flicker);
        assert_eq!(candle.flame_led_brightness, before.flame_led_brightness);
    }

    #[test]
    fn test_color_phase_wraps_palette() {
        for frame in (0..100_000).step_by(97) {
            let clock = FlameClock::new(frame, 0.6, 2.0);
            let (phase, mix) = color_phase(&clock, 4, 3);
            assert!((0.0..3.0).contains(&phase));
            assert!((mix - (phase - phase.floor())).abs() < 1e-6);
        }
        assert_eq!(color_phase(&FlameClock::new(5, 1.0, 0.0), 0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_bursts_rise_and_vanish() {
        // StepRng(0, 0) wins every spawn roll
        let mut rng = StepRng::new(0, 0);
        let mut bursts = BurstAnimation::new();

        bursts.advance(&FlameClock::new(0, 1.0, 0.0), &mut rng);
        assert_eq!(bursts.positions().len(), 1);
        assert!((bursts.positions()[0] - 0.18).abs() < 1e-6);
        assert!(bursts.led_variation(0, &FlameClock::new(0, 1.0, 0.0)) > 0.0);
        assert_eq!(bursts.led_variation(5, &FlameClock::new(0, 1.0, 0.0)), 0.0);

        for frame in 1..=40 {
            bursts.advance(&FlameClock::new(frame, 1.0, 0.0), &mut rng);
        }
        assert_eq!(bursts.positions().len(), 1);
        assert!((bursts.positions()[0] - 2.88).abs() < 1e-3);
    }

    #[test]
    fn test_bursts_cleared_on_reset() {
        let mut rng = StepRng::new(0, 0);
        let mut bursts = BurstAnimation::new();
        for frame in 0..60 {
            bursts.advance(&FlameClock::new(frame, 0.3, 0.0), &mut rng);
        }
        assert!(!bursts.positions().is_empty());
        assert!(bursts.positions().len() <= 4);

        FlameAnimation::reset(&mut bursts);
        assert!(bursts.positions().is_empty());
    }
}
