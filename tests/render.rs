mod tests {
    use menorah_light_composer::bounds::StripSegments;
    use menorah_light_composer::color::{OFF, blend_colors, scale_color};
    use menorah_light_composer::render::{flame_color, render_candle, render_night_indicator};
    use menorah_light_composer::{BurnConfig, Candle, ColorConfig, LEDS_PER_STRIP, Rgbw};

    fn placed() -> Candle {
        let mut candle = Candle::new(&BurnConfig::default());
        candle.placed = true;
        candle
    }

    fn strip() -> [Rgbw; LEDS_PER_STRIP] {
        [OFF; LEDS_PER_STRIP]
    }

    #[test]
    fn test_segments_clip_to_strip() {
        let segments = StripSegments::new(5, 3, 8);
        assert_eq!(segments.base, 0..5);
        assert_eq!(segments.flame, 5..8);

        let segments = StripSegments::new(5, 5, 8);
        assert_eq!(segments.flame, 5..8);
        assert_eq!(segments.flame_len(), 3);

        let segments = StripSegments::new(10, 2, 8);
        assert_eq!(segments.base, 0..8);
        assert_eq!(segments.flame_len(), 0);
    }

    #[test]
    fn test_unplaced_candle_is_dark() {
        let colors = ColorConfig::default();
        let mut leds = [colors.base; LEDS_PER_STRIP];
        render_candle(&Candle::new(&BurnConfig::default()), &colors, 1.0, &mut leds);
        assert!(leds.iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_waiting_candle_shows_dim_base() {
        let colors = ColorConfig::default();
        let mut leds = strip();
        render_candle(&placed(), &colors, 0.5, &mut leds);

        let expected = scale_color(colors.base, 0.8 * 0.3 * 0.5);
        assert!(leds[..5].iter().all(|led| *led == expected));
        assert!(leds[5..].iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_burnt_out_candle_keeps_one_led() {
        let colors = ColorConfig::default();
        let mut candle = placed();
        candle.base_leds = 1;
        candle.flame_leds = 0;
        let mut leds = strip();
        render_candle(&candle, &colors, 1.0, &mut leds);

        assert_eq!(leds[0], scale_color(colors.base, 0.8 * 0.3));
        assert!(leds[1..].iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_lit_candle_base_and_flame() {
        let colors = ColorConfig::default();
        let mut candle = placed();
        candle.lit = true;
        candle.flame_leds = 3;
        candle.flame_brightness = 1.0;
        let mut leds = strip();
        render_candle(&candle, &colors, 1.0, &mut leds);

        let base = scale_color(colors.base, 0.8 * 0.4);
        assert!(leds[..5].iter().all(|led| *led == base));

        // Gradient: the flame dims towards the top
        let flame = flame_color(&candle, &colors);
        assert_eq!(leds[5], flame);
        assert!(leds[7].r < leds[5].r);
        assert!(leds[7] != OFF);
    }

    #[test]
    fn test_tall_flame_is_clipped() {
        let colors = ColorConfig::default();
        let mut candle = placed();
        candle.lit = true;
        candle.flame_leds = 5;
        let mut leds = strip();
        render_candle(&candle, &colors, 1.0, &mut leds);
        assert!(leds.iter().all(|led| *led != OFF));
    }

    #[test]
    fn test_flame_color_blends_palette() {
        let colors = ColorConfig::default();
        let mut candle = placed();
        candle.white_flicker = 0.0;

        assert_eq!(flame_color(&candle, &colors), colors.flame_palette[0]);

        candle.color_phase = 2.5;
        candle.color_mix = 0.5;
        let expected = blend_colors(colors.flame_palette[2], colors.flame_palette[0], 0.5);
        assert_eq!(flame_color(&candle, &colors), expected);
    }

    #[test]
    fn test_white_flicker_adds_white() {
        let colors = ColorConfig::default();
        let mut candle = placed();
        let plain = flame_color(&candle, &colors);
        candle.white_flicker = 0.35;
        let flickering = flame_color(&candle, &colors);
        assert!(flickering.a.0 > plain.a.0);
    }

    #[test]
    fn test_night_indicator() {
        let color = ColorConfig::default().selection;
        let mut leds = strip();
        render_night_indicator(3, color, 1.0, &mut leds);
        assert!(leds[..3].iter().all(|led| *led == color));
        assert!(leds[3..].iter().all(|led| *led == OFF));

        render_night_indicator(8, color, 1.0, &mut leds);
        assert!(leds.iter().all(|led| *led == color));
    }
}
