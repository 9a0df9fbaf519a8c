//! Integration tests for the public palette and accessibility API
//!
//! These tests exercise the crate the way a front-end would:
//! - Parsing user-typed colors and converting between representations
//! - Generating palettes by scheme name, mood and gradient
//! - Analyzing generated palettes for WCAG contrast
//! - Falling back gracefully on malformed input

use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use swatchbook::{
    accessibility_level, analyze_palette_accessibility, available_moods, available_palette_types,
    color_gradient, contrast_ratio, describe_color, generate_palette_by_type, harmonious_palette,
    hex_to_hsl, hex_to_rgb, hsl_to_rgb, mood_palette, multi_gradient_palette, rgb_to_hex,
    rgb_to_hsl, AccessibilityLevel, GeneratorConfig, PaletteError, PaletteGenerator, SchemeKind,
};

// ============================================================================
// Conversion Properties
// ============================================================================

#[test]
fn test_hex_rgb_roundtrip() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let (r, g, b): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
        let hex = rgb_to_hex(r, g, b);
        let rgb = hex_to_rgb(&hex).expect("formatted hex must parse");
        assert_eq!((rgb.r, rgb.g, rgb.b), (r, g, b));
    }
}

#[test]
fn test_lowercase_hex_normalizes() {
    for hex in ["#a1b2c3", "a1b2c3", "#A1b2C3"] {
        let rgb = hex_to_rgb(hex).unwrap();
        assert_eq!(rgb.to_hex(), "#A1B2C3");
    }
}

#[test]
fn test_rgb_hsl_rgb_roundtrip_is_close() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let (r, g, b): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
        let hsl = rgb_to_hsl(r, g, b);
        assert!(hsl.h >= 0.0 && hsl.h < 360.0);
        assert!((0.0..=100.0).contains(&hsl.s));
        assert!((0.0..=100.0).contains(&hsl.l));

        let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        // Whole-degree/whole-percent HSL cannot address every RGB value
        for (a, b) in [(back.r, r), (back.g, g), (back.b, b)] {
            assert!((i32::from(a) - i32::from(b)).abs() <= 5, "{:?} vs {:?}", back, (r, g, b));
        }
    }
}

#[test]
fn test_malformed_hex_has_no_value() {
    for input in ["red", "#FFF", "#GGGGGG", ""] {
        assert_eq!(hex_to_rgb(input), None, "input {:?}", input);
        assert_eq!(hex_to_hsl(input), None, "input {:?}", input);
    }
}

// ============================================================================
// Contrast Properties
// ============================================================================

#[test]
fn test_contrast_symmetric_and_at_least_one() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = swatchbook::generate_random_color_with(&mut rng);
        let b = swatchbook::generate_random_color_with(&mut rng);
        let ab = contrast_ratio(&a, &b);
        assert_eq!(ab, contrast_ratio(&b, &a));
        assert!(ab >= 1.0);
        assert!(ab <= 21.0 + 1e-9);
        assert_eq!(contrast_ratio(&a, &a), 1.0);
    }
}

#[test]
fn test_maximum_contrast() {
    assert!((contrast_ratio("#000000", "#FFFFFF") - 21.0).abs() < 1e-9);
}

#[test]
fn test_level_boundaries() {
    let cases = [
        (7.0, AccessibilityLevel::Aaa),
        (6.99, AccessibilityLevel::Aa),
        (4.5, AccessibilityLevel::Aa),
        (4.49, AccessibilityLevel::AaLarge),
        (3.0, AccessibilityLevel::AaLarge),
        (2.99, AccessibilityLevel::Fail),
    ];
    for (ratio, expected) in cases {
        assert_eq!(accessibility_level(ratio).level, expected, "ratio {}", ratio);
    }
}

#[test]
fn test_palette_analysis_pair_count() {
    for n in 0..8 {
        let palette = generate_palette_by_type("#3366CC", "square", n.max(4));
        let palette = &palette[..n.min(palette.len())];
        let reports = analyze_palette_accessibility(palette);
        assert_eq!(reports.len(), n * n.saturating_sub(1) / 2);
        assert!(reports.iter().all(|r| r.contrast >= 1.0));
    }
}

// ============================================================================
// Palette Generation
// ============================================================================

#[test]
fn test_every_scheme_starts_with_base() {
    for name in available_palette_types() {
        for count in [1, 3, 5, 9] {
            let palette = generate_palette_by_type("#FF0000", name, count);
            assert_eq!(palette[0], "#FF0000", "scheme {} count {}", name, count);
            assert!(palette.len() >= count, "scheme {} count {}", name, count);
        }
    }
    assert_eq!(harmonious_palette("#FF0000", 4)[0], "#FF0000");
}

#[test]
fn test_every_generated_color_is_canonical() {
    for name in available_palette_types() {
        for color in generate_palette_by_type("#8A2BE2", name, 10).iter().skip(1) {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert_eq!(color, &color.to_uppercase());
            assert!(hex_to_rgb(color).is_some());
        }
    }
}

#[test]
fn test_triadic_red_hues() {
    let palette = generate_palette_by_type("#FF0000", "triadic", 3);
    let hues: Vec<f64> = palette.iter().map(|c| hex_to_hsl(c).unwrap().h).collect();
    assert_eq!(hues, vec![0.0, 120.0, 240.0]);
    for color in &palette {
        let hsl = hex_to_hsl(color).unwrap();
        assert_eq!((hsl.s, hsl.l), (100.0, 50.0));
    }
}

#[test]
fn test_unknown_type_is_analogous() {
    assert_eq!(
        generate_palette_by_type("#3366CC", "doesNotExist", 6),
        generate_palette_by_type("#3366CC", "analogous", 6)
    );
}

#[test]
fn test_moods() {
    for mood in available_moods() {
        assert_eq!(mood_palette(mood, 5).len(), 5);
        assert_eq!(mood_palette(mood, 12).len(), 12);
        assert_eq!(mood_palette(mood, 2), mood_palette(mood, 5)[..2].to_vec());
    }
    assert_eq!(mood_palette("unknown", 4), mood_palette("calm", 4));
}

#[test]
fn test_degenerate_gradient() {
    for color in ["#FF0000", "#3366CC", "#000000", "#FFFFFF"] {
        assert_eq!(color_gradient(color, color, 6), vec![color; 6]);
    }
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(17) {
                let color = rgb_to_hex(r, g, b);
                assert_eq!(color_gradient(&color, &color, 4), vec![color.clone(); 4]);
            }
        }
    }
    assert_eq!(color_gradient("#abcdef", "#ABCDEF", 3), vec!["#ABCDEF"; 3]);
}

#[test]
fn test_multi_gradient_length() {
    let stops = ["#FF0000", "#00FF00", "#0000FF", "#FF00FF"];
    let palette = multi_gradient_palette(&stops, 4);
    // Three segments of four points, sharing two junctions
    assert_eq!(palette.len(), 10);
    assert_eq!(palette.first().map(String::as_str), Some("#FF0000"));
    assert_eq!(palette.last().map(String::as_str), Some("#FF00FF"));

    let palette = multi_gradient_palette(&["#123456", "#ABCDEF", "#FEDCBA"], 3);
    assert_eq!(
        [palette[0].as_str(), palette[2].as_str(), palette[4].as_str()],
        ["#123456", "#ABCDEF", "#FEDCBA"]
    );
}

// ============================================================================
// Configured Generator
// ============================================================================

#[test]
fn test_generator_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "scheme": "complementary", "count": 4 }"#).unwrap();

    let config = GeneratorConfig::from_json_file(&path).unwrap();
    let generator = PaletteGenerator::from_config(config).unwrap();
    let report = generator.report("#FF0000");

    assert_eq!(report.scheme, SchemeKind::Complementary);
    assert_eq!(report.colors.len(), 4);
    assert_eq!(report.colors[1], "#00FFFF");
    assert_eq!(report.accessibility.len(), 6);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_describe_color_rejects_malformed() {
    let err = describe_color("chartreuse").unwrap_err();
    assert!(matches!(err, PaletteError::InvalidHex { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_strict_scheme_lookup() {
    let err = SchemeKind::try_from_name("pastel").unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("pastel"));
}

#[test]
fn test_malformed_base_never_panics() {
    for name in available_palette_types() {
        let palette = generate_palette_by_type("not-a-color", name, 3);
        assert_eq!(palette, vec!["not-a-color"; 3]);
    }
    assert_eq!(color_gradient("bad", "worse", 3), vec!["#000000"; 3]);
}
