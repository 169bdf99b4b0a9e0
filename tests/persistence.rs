mod tests {
    use wearable_light::color::{BLACK, Rgb, WHITE};
    use wearable_light::preset::{
        MAX_STRIP_LEN, Preset, PresetCollection, PresetError, PresetKind, PresetLine,
        PresetTemplate, parse_preset_line, write_preset_line,
    };

    const N: usize = 4;

    const DEFAULTS: [PresetTemplate; 1] = [PresetTemplate::new("Rainbow", PresetKind::Rainbow)];

    fn line_of(preset: &Preset<N>) -> String {
        let mut line = PresetLine::new();
        write_preset_line(preset, &mut line).unwrap();
        line.as_str().to_string()
    }

    #[test]
    fn test_write_static_line() {
        let preset = Preset::<N>::new_static("Mine", Rgb::new(0x11, 0x22, 0x0a)).unwrap();
        assert_eq!(line_of(&preset), "Mine,0,11220a");
    }

    #[test]
    fn test_write_custom_line() {
        let preset = Preset::<N>::new_custom("Dots", &[WHITE, Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(line_of(&preset), "Dots,9,ffffff;010203;000000;000000");
    }

    #[test]
    fn test_custom_round_trip() {
        let colors = [
            Rgb::new(0x01, 0x02, 0x03),
            Rgb::new(0xa0, 0xb0, 0xc0),
            Rgb::new(0xff, 0x00, 0x7f),
            Rgb::new(0x10, 0x20, 0x30),
        ];
        let preset = Preset::<N>::new_custom("Four", &colors).unwrap();
        let restored = parse_preset_line::<N>(&line_of(&preset)).unwrap();
        assert_eq!(restored, preset);
        assert_eq!(restored.leds(), &colors);
    }

    #[test]
    fn test_parse_static_line() {
        let preset = parse_preset_line::<N>("Warm,0,FFA000\r\n").unwrap();
        assert_eq!(preset.name(), "Warm");
        assert_eq!(preset.kind(), PresetKind::Static);
        assert_eq!(preset.color(), Rgb::new(0xff, 0xa0, 0x00));
        assert!(preset.leds().is_empty());
    }

    #[test]
    fn test_parse_short_custom_line_pads() {
        let preset = parse_preset_line::<N>("Two,9,ffffff;ffffff").unwrap();
        assert_eq!(preset.leds(), &[WHITE, WHITE, BLACK, BLACK]);
    }

    #[test]
    fn test_parse_malformed_lines() {
        for line in [
            "",
            "NoFields",
            "Name,0",
            "Name,0,ffffff,extra",
            "Name,x,ffffff",
            "Name,-1,ffffff",
            "Name,10,ffffff",
            "Name,0,fffff",
            "Name,0,#ffffff",
            "Name,0,ffffff;000000",
            "Name,9,",
            "Name,9,ffffff;;ffffff",
            "Name,9,ffffff;ffffff;ffffff;ffffff;ffffff",
            ",0,ffffff",
        ] {
            assert!(parse_preset_line::<N>(line).is_err(), "{line:?}");
        }
        assert_eq!(
            parse_preset_line::<N>("Name,0"),
            Err(PresetError::Corrupt)
        );
    }

    #[test]
    fn test_load_skips_corrupt_lines() {
        let mut presets = PresetCollection::<N>::new(&DEFAULTS).unwrap();
        let loaded = presets.load_custom([
            "First,0,112233",
            "garbage",
            "Second,9,ffffff;000001",
            "Third,0,zzzzzz",
        ]);

        assert_eq!(loaded, 2);
        assert_eq!(presets.count(), 4);
        let names: Vec<&str> = presets.custom().iter().map(Preset::name).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(presets.current_index(), 0);
    }

    #[test]
    fn test_serialize_covers_custom_segment_only() {
        let mut presets = PresetCollection::<N>::new(&DEFAULTS).unwrap();
        presets.add_static("Mine", Rgb::new(1, 2, 3)).unwrap();
        presets.select(0).unwrap();
        presets.set_current_leds(&[WHITE]).unwrap();

        let lines: Vec<String> = presets
            .serialize_custom()
            .map(|line| line.as_str().to_string())
            .collect();
        assert_eq!(lines, ["Mine,0,010203"]);
    }

    #[test]
    fn test_serialize_then_load_reproduces_presets() {
        let mut source = PresetCollection::<N>::new(&DEFAULTS).unwrap();
        source.add_static("Mine", Rgb::new(1, 2, 3)).unwrap();
        source
            .set_current_leds(&[Rgb::new(9, 8, 7), Rgb::new(6, 5, 4), WHITE, Rgb::new(0, 0, 1)])
            .unwrap();
        source.add_static("Plain", WHITE).unwrap();

        let lines: Vec<PresetLine> = source.serialize_custom().collect();
        let mut restored = PresetCollection::<N>::new(&DEFAULTS).unwrap();
        restored.load_custom(lines.iter().map(PresetLine::as_str));

        assert_eq!(restored.custom_count(), 2);
        for (restored, source) in restored.custom().iter().zip(source.custom()) {
            assert_eq!(restored.name(), source.name());
            assert_eq!(restored.kind(), source.kind());
            assert_eq!(restored.leds(), source.leds());
        }
        // Static presets carry their color; custom ones only their LEDs
        assert_eq!(restored.custom()[1].color(), WHITE);
    }

    #[test]
    fn test_longest_strip_fits_one_line() {
        let name = "n".repeat(24);
        let leds = [WHITE; MAX_STRIP_LEN];
        let preset = Preset::<MAX_STRIP_LEN>::new_custom(&name, &leds).unwrap();

        let mut presets = PresetCollection::<MAX_STRIP_LEN>::new(&DEFAULTS).unwrap();
        presets.insert(preset).unwrap();
        let lines: Vec<PresetLine> = presets.serialize_custom().collect();
        assert_eq!(lines.len(), 1);

        let restored = parse_preset_line::<MAX_STRIP_LEN>(&lines[0]).unwrap();
        assert_eq!(restored.name(), name);
        assert_eq!(restored.leds(), leds.as_slice());
    }
}
