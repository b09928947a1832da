mod tests {
    use myrtio_sunrise::color::{Color, Rgb, normalize_to_byte, scale_color};
    use myrtio_sunrise::preset::{
        DEFAULT_PIXEL_COUNT, SUNRISE_COLOR, SUNRISE_END_STOPS, SUNRISE_START_STOPS,
    };
    use myrtio_sunrise::{InvalidConfiguration, LuminosityProfile, Sky};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn sunrise() -> Sky<DEFAULT_PIXEL_COUNT> {
        Sky::new(&SUNRISE_START_STOPS, &SUNRISE_END_STOPS).unwrap()
    }

    #[test]
    fn test_sky_starts_dark() {
        let sky = sunrise();
        assert_eq!(sky.colors_at(0.0), [BLACK; DEFAULT_PIXEL_COUNT]);
    }

    #[test]
    fn test_colors_at_is_deterministic() {
        let sky = sunrise();
        for progress in [0.0, 0.1, 0.37, 0.5, 0.99, 1.0] {
            assert_eq!(sky.colors_at(progress), sky.colors_at(progress));
        }
    }

    #[test]
    fn test_sky_ends_on_scaled_end_gradient() {
        let sky = sunrise();
        let frame = sky.colors_at(1.0);

        // Edge of the mirrored end gradient is the outermost end stop
        let edge = SUNRISE_END_STOPS[1];
        let luminosity = sky.luminosity().next().unwrap();
        assert_eq!(frame[0], normalize_to_byte(scale_color(edge, luminosity)));
        assert_eq!(frame[0], Rgb::new(25, 19, 9));
        assert_eq!(frame[15], frame[0]);

        // Center plateau shows the first end stop at full brightness
        assert_eq!(frame[7], Rgb::new(255, 183, 59));
        assert_eq!(frame[8], Rgb::new(255, 183, 59));
    }

    #[test]
    fn test_sky_midway_is_between_endpoints() {
        let sky = sunrise();
        let start = sky.colors_at(0.0);
        let middle = sky.colors_at(0.5);
        let end = sky.colors_at(1.0);

        for i in 0..DEFAULT_PIXEL_COUNT {
            let channels = [
                (start[i].r, middle[i].r, end[i].r),
                (start[i].g, middle[i].g, end[i].g),
                (start[i].b, middle[i].b, end[i].b),
            ];
            for (low, mid, high) in channels {
                assert!(low < mid && mid < high, "pixel {i}: {low} {mid} {high}");
            }
        }
    }

    #[test]
    fn test_sky_frame_is_symmetric() {
        let sky = sunrise();
        for progress in [0.5, 1.0] {
            let frame = sky.colors_at(progress);
            for i in 0..DEFAULT_PIXEL_COUNT {
                assert_eq!(frame[i], frame[DEFAULT_PIXEL_COUNT - 1 - i]);
            }
        }
    }

    #[test]
    fn test_progress_out_of_range_is_clamped() {
        let sky = sunrise();
        assert_eq!(sky.colors_at(-0.2), sky.colors_at(0.0));
        assert_eq!(sky.colors_at(1.3), sky.colors_at(1.0));
        assert_eq!(sky.colors_at(f32::NAN), sky.colors_at(0.0));
    }

    #[test]
    fn test_out_of_range_colors_are_clamped() {
        let wild = Color {
            r: 300.0,
            g: -50.0,
            b: 1000.0,
        };
        let sky = Sky::<5>::new(&[wild], &[wild]).unwrap();
        let frame = sky.colors_at(1.0);

        assert_eq!(frame[0], Rgb::new(30, 0, 100));
        assert_eq!(frame[2], Rgb::new(255, 0, 255));
        assert_eq!(frame[4], Rgb::new(30, 0, 100));
    }

    #[test]
    fn test_single_stop_sky_is_uniform_before_luminosity() {
        let color = Color::new(200.0, 100.0, 50.0);
        let sky = Sky::<9>::new(&[color], &[color]).unwrap();
        assert!(sky.start_gradient().all(|pixel| pixel == color));
        assert!(sky.end_gradient().all(|pixel| pixel == color));

        let frame = sky.colors_at(1.0);
        for (pixel, luminosity) in frame.iter().zip(sky.luminosity()) {
            assert_eq!(*pixel, normalize_to_byte(scale_color(color, luminosity)));
        }
    }

    #[test]
    fn test_sunrise_color_as_single_stop() {
        let sky = Sky::<DEFAULT_PIXEL_COUNT>::new(&[SUNRISE_COLOR], &[SUNRISE_COLOR]).unwrap();
        assert!(sky.start_gradient().all(|pixel| pixel == SUNRISE_COLOR));
        assert!(sky.end_gradient().all(|pixel| pixel == SUNRISE_COLOR));

        let frame = sky.colors_at(1.0);
        assert_eq!(frame[7], Rgb::new(0xFB, 0xAB, 0x17));
        assert_eq!(frame[8], Rgb::new(0xFB, 0xAB, 0x17));
        assert_eq!(frame[0], frame[DEFAULT_PIXEL_COUNT - 1]);
        assert_eq!(sky.colors_at(0.0), [BLACK; DEFAULT_PIXEL_COUNT]);
    }

    #[test]
    fn test_sky_rejects_empty_stops() {
        assert_eq!(
            Sky::<16>::new(&[], &SUNRISE_END_STOPS).err(),
            Some(InvalidConfiguration::EmptyStops)
        );
        assert_eq!(
            Sky::<16>::new(&SUNRISE_START_STOPS, &[]).err(),
            Some(InvalidConfiguration::EmptyStops)
        );
    }

    #[test]
    fn test_sky_with_flat_profile() {
        let color = Color::new(200.0, 100.0, 50.0);
        let profile = LuminosityProfile {
            peak: 1.0,
            exponent: 1.0,
        };
        let sky = Sky::<1>::with_profile(&[color], &[color], profile).unwrap();
        assert_eq!(sky.profile(), profile);
        assert_eq!(sky.colors_at(0.5), [Rgb::new(100, 50, 25)]);
    }

    #[test]
    fn test_empty_sky() {
        let sky = Sky::<0>::new(&SUNRISE_START_STOPS, &SUNRISE_END_STOPS).unwrap();
        assert!(sky.is_empty());
        assert_eq!(sky.len(), 0);
        assert!(sky.colors_at(1.0).is_empty());
    }
}
