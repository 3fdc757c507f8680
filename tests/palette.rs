// SPDX-License-Identifier: MIT
//
// End-to-end checks through the string-level entry points.

use autotheme::{
    Color, Error, HarmonyKind, Palette, contrast_ratio, generate, generate_palette,
    theme_from_toml,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

fn all_colors(p: &Palette) -> Vec<Color> {
    let mut out = vec![p.seed, p.off_white, p.off_black];
    for set in &p.harmony {
        out.push(set.main);
        out.extend(&set.shades);
        out.extend(&set.tints);
        out.extend(&set.tones);
    }
    let dark = p.dark.as_deref().unwrap_or_default();
    for t in p.light.iter().chain(dark) {
        out.extend([t.main, t.dark, t.light, t.neutral, t.contrast]);
    }
    out
}

// ── Triadic example ─────────────────────────────────────────────────

#[test]
fn triadic_from_strings() {
    let p = generate("#3366CC", "triadic").unwrap();
    let seed = Color::hex("#3366cc").unwrap();
    assert_eq!(p.harmony.len(), 3);
    assert_eq!(p.harmony[0].main, seed);

    let base = seed.to_hsl();
    for (set, offset) in p.harmony[1..].iter().zip([120.0, 240.0]) {
        let hsl = set.main.to_hsl();
        assert!(hue_diff(hsl.h, base.h + offset) < 1e-6, "hue {}", hsl.h);
        assert!(approx_eq(hsl.s, base.s, 1e-9));
        assert!(approx_eq(hsl.l, base.l, 1e-9));
    }
}

#[test]
fn triadic_off_white_beats_every_candidate() {
    let p = generate("#3366cc", "triadic").unwrap();
    let best = contrast_ratio(p.seed, p.off_white);
    for set in &p.harmony {
        let hsl = set.main.to_hsl();
        let candidate = Color::hsl(hsl.h, hsl.s, 0.97);
        assert!(best >= contrast_ratio(p.seed, candidate));
    }
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn same_input_same_palette() {
    for kind in HarmonyKind::ALL {
        let a = generate("#a1b2c3", kind.name()).unwrap();
        let b = generate("#a1b2c3", kind.name()).unwrap();
        assert_eq!(a, b, "{kind}");
    }
}

#[test]
fn retrograde_is_reversed() {
    let seed = Color::hex("#3366cc").unwrap();
    let mut spread = at_palette::harmony::analogous_spread(seed, 5, 115.0);
    spread.reverse();
    let p = generate_palette(seed, HarmonyKind::Retrograde);
    let mains: Vec<Color> = p.harmony.iter().map(|s| s.main).collect();
    assert_eq!(mains, spread);
}

#[test]
fn boundary_seeds_get_legible_text() {
    for hex in ["#ffffff", "#000000"] {
        let p = generate(hex, "complementary").unwrap();
        let dark = p.dark.as_deref().unwrap_or_default();
        for (sets, bg) in [(p.light.as_slice(), p.off_white), (dark, p.off_black)] {
            for set in sets {
                let ratio = contrast_ratio(set.main, bg);
                assert!(ratio >= 7.0, "{hex}: {} on {bg} = {ratio}", set.main);
            }
        }
    }
}

// ── Fail-fast parsing ───────────────────────────────────────────────

#[test]
fn malformed_seeds_fail() {
    for bad in ["", "#", "3366cc", "#3366c", "#3366ccc", "#zzzzzz", "#12345678"] {
        let err = generate(bad, "triadic").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)), "{bad:?}");
    }
}

#[test]
fn unknown_harmony_fails() {
    let err = generate("#3366cc", "hexadic").unwrap_err();
    assert!(matches!(err, Error::InvalidHarmonyKind(ref n) if n == "hexadic"));
    assert_eq!(err.to_string(), "unknown harmony kind \"hexadic\"");
}

#[test]
fn short_hex_matches_long_hex() {
    assert_eq!(
        generate("#36c", "square").unwrap(),
        generate("#3366cc", "square").unwrap()
    );
}

// ── TOML requests ───────────────────────────────────────────────────

#[test]
fn toml_request_overrides_fallbacks() {
    let theme = theme_from_toml(
        r##"
primary = "#cc3366"
harmony = "bi-polar"
shades = 3
dark-mode = false
"##,
        Color::WHITE,
        HarmonyKind::Triadic,
    )
    .unwrap();

    assert_eq!(theme.palette.seed.to_hex(), "#cc3366");
    assert_eq!(theme.palette.harmony_kind, HarmonyKind::BiPolar);
    assert_eq!(theme.palette.harmony[0].shades.len(), 3);
    assert_eq!(theme.palette.dark, None);
}

#[test]
fn toml_request_falls_back_when_silent() {
    let fallback = Color::hex("#808000").unwrap();
    let theme = theme_from_toml("tints = 2", fallback, HarmonyKind::Analogous).unwrap();
    assert_eq!(theme.palette.seed, fallback);
    assert_eq!(theme.palette.harmony_kind, HarmonyKind::Analogous);
    assert_eq!(theme.palette.harmony[1].tints.len(), 2);
}

#[test]
fn toml_request_rejects_bad_values() {
    let cases: [(&str, fn(&Error) -> bool); 4] = [
        ("primary = \"red\"", |e| matches!(e, Error::InvalidColor(_))),
        ("harmony = \"hexadic\"", |e| matches!(e, Error::InvalidHarmonyKind(_))),
        ("target-ratio = 30.0", |e| matches!(e, Error::InvalidOption { .. })),
        ("dark-mode = \"yes\"", |e| matches!(e, Error::Config(_))),
    ];
    for (source, check) in cases {
        let err = theme_from_toml(source, Color::WHITE, HarmonyKind::Triadic).unwrap_err();
        assert!(check(&err), "{source}: {err}");
    }
}

#[test]
fn toml_scale_ratio() {
    let theme = theme_from_toml("scale-ratio = 2.0", Color::WHITE, HarmonyKind::Triadic).unwrap();
    assert_eq!(&theme.scale[..4], &[0.5, 1.0, 2.0, 4.0]);

    let err = theme_from_toml("scale-ratio = 0.0", Color::WHITE, HarmonyKind::Triadic).unwrap_err();
    assert!(matches!(err, Error::InvalidOption { name: "ratio", .. }));
}

// ── Properties ──────────────────────────────────────────────────────

fn any_kind() -> impl Strategy<Value = HarmonyKind> {
    (0..HarmonyKind::ALL.len()).prop_map(|i| HarmonyKind::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_color_stays_in_gamut(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), kind in any_kind()) {
        let p = generate_palette(Color::rgb8(r, g, b), kind);
        for c in all_colors(&p) {
            let (r, g, b) = c.to_srgb();
            for v in [r, g, b] {
                prop_assert!((0.0..=1.0).contains(&v), "{} has channel {}", c, v);
            }
        }
    }

    #[test]
    fn cardinality_is_fixed(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), kind in any_kind()) {
        let p = generate_palette(Color::rgb8(r, g, b), kind);
        prop_assert_eq!(p.harmony.len(), kind.count());
        prop_assert_eq!(p.light.len(), kind.count());
    }
}
