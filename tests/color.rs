mod tests {
    use myrtio_sunrise::color::{
        Color, Rgb, color_from_rgb, color_from_u32, merge_weighted, normalize_to_byte,
        scale_color,
    };

    const RED: Color = Color { r: 255.0, g: 0.0, b: 0.0 };
    const BLUE: Color = Color { r: 0.0, g: 0.0, b: 255.0 };

    #[test]
    fn test_merge_weighted_endpoints() {
        assert_eq!(merge_weighted(RED, BLUE, 0.0), BLUE);
        assert_eq!(merge_weighted(RED, BLUE, 1.0), RED);
        assert_eq!(
            merge_weighted(RED, BLUE, 0.5),
            Color {
                r: 127.5,
                g: 0.0,
                b: 127.5
            }
        );
    }

    #[test]
    fn test_merge_weighted_does_not_clamp() {
        let merged = merge_weighted(RED, BLUE, 2.0);
        assert_eq!(
            merged,
            Color {
                r: 510.0,
                g: 0.0,
                b: -255.0
            }
        );
    }

    #[test]
    fn test_normalize_to_byte() {
        assert_eq!(
            normalize_to_byte(Color {
                r: 25.9,
                g: 0.4,
                b: 254.99
            }),
            Rgb::new(25, 0, 254)
        );
        assert_eq!(
            normalize_to_byte(Color {
                r: 300.0,
                g: -50.0,
                b: 1000.0
            }),
            Rgb::new(255, 0, 255)
        );
        assert_eq!(
            normalize_to_byte(Color {
                r: f32::NAN,
                g: f32::INFINITY,
                b: f32::NEG_INFINITY
            }),
            Rgb::new(0, 255, 0)
        );
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(
            scale_color(RED, 0.5),
            Color {
                r: 127.5,
                g: 0.0,
                b: 0.0
            }
        );
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(color_from_rgb(Rgb::new(1, 2, 3)), Color::new(1.0, 2.0, 3.0));
        assert_eq!(color_from_u32(0xFF_B0_3B), Color::new(255.0, 176.0, 59.0));
    }
}
