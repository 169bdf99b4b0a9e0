mod tests {
    use wearable_light::color::{
        BLACK, ColorError, Rgb, WHITE, dim, format_hex_color, parse_hex_color, rgb_from_u32,
        rgb_to_u32,
    };

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_hex_color("1A2B3C"), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex_color("ff00ff"), Ok(Rgb::new(255, 0, 255)));
        assert_eq!(parse_hex_color("000000"), Ok(BLACK));
        assert_eq!(parse_hex_color("FFFFFF"), Ok(WHITE));
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(parse_hex_color(""), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("fff"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("12345"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("1234567"), Err(ColorError::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_marker() {
        // Callers strip the '#' before parsing
        assert_eq!(parse_hex_color("#12345"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("#123456"), Err(ColorError::InvalidFormat));
    }

    #[test]
    fn test_parse_invalid_chars() {
        assert_eq!(parse_hex_color("gg0000"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("ZZZZZZ"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("12 456"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("+12345"), Err(ColorError::InvalidFormat));
        assert_eq!(parse_hex_color("12345é"), Err(ColorError::InvalidFormat));
    }

    #[test]
    fn test_format_zero_padded_lowercase() {
        assert_eq!(format_hex_color(Rgb::new(0, 0, 1)).as_str(), "000001");
        assert_eq!(format_hex_color(Rgb::new(0xab, 0xcd, 0xef)).as_str(), "abcdef");
        assert_eq!(format_hex_color(BLACK).as_str(), "000000");
    }

    #[test]
    fn test_format_parse_lowercases() {
        for text in ["A0B0C0", "a0B0c0", "010203", "FfFfFf"] {
            let color = parse_hex_color(text).unwrap();
            assert_eq!(format_hex_color(color).as_str(), text.to_lowercase());
        }
    }

    #[test]
    fn test_u32_packing() {
        assert_eq!(rgb_from_u32(0x0011_2233), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(rgb_to_u32(Rgb::new(0x11, 0x22, 0x33)), 0x0011_2233);
    }

    #[test]
    fn test_dim() {
        let mut frame = [WHITE, Rgb::new(128, 64, 0)];
        dim(&mut frame, 255);
        assert_eq!(frame, [WHITE, Rgb::new(128, 64, 0)]);

        dim(&mut frame, 0);
        assert_eq!(frame, [BLACK, BLACK]);

        let mut frame = [WHITE];
        dim(&mut frame, 128);
        assert_eq!(frame, [Rgb::new(128, 128, 128)]);
    }
}
