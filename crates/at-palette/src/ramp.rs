//! Shade, tint and tone ramps.
//!
//! A ramp of `n` steps holds `n` colors and never contains the base itself.
//! Step `i` (1-based) sits at `t = i / (n + 1)` of the way from the base to
//! the ramp's target, so the last step stops short of pure black, pure
//! white or full gray. All interpolation is in CIE Lab.

use std::fmt;

use at_color::{Color, Lab};

/// Which way a ramp moves away from its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampKind {
    /// Toward black.
    Shade,
    /// Toward white.
    Tint,
    /// Toward gray at the base's Lab lightness.
    Tone,
}

impl RampKind {
    pub const ALL: [Self; 3] = [Self::Shade, Self::Tint, Self::Tone];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shade => "shade",
            Self::Tint => "tint",
            Self::Tone => "tone",
        }
    }
}

impl fmt::Display for RampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build a `steps`-long ramp from `base`.
#[must_use]
pub fn build_ramp(base: Color, steps: usize, kind: RampKind) -> Vec<Color> {
    let lab = base.to_lab();
    let denom = (steps + 1) as f64;
    (1..=steps)
        .map(|i| {
            let t = i as f64 / denom;
            match kind {
                RampKind::Shade => base.mix_lab(Color::BLACK, t),
                RampKind::Tint => base.mix_lab(Color::WHITE, t),
                RampKind::Tone => Color::from_lab(Lab {
                    l: lab.l,
                    a: lab.a * (1.0 - t),
                    b: lab.b * (1.0 - t),
                }),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn seed() -> Color {
        Color::hex("#3366cc").unwrap()
    }

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex()).collect()
    }

    // ── Lengths ─────────────────────────────────────────────────────

    #[test]
    fn length_matches_steps() {
        for kind in RampKind::ALL {
            for steps in [0, 1, 3, 5, 10] {
                assert_eq!(build_ramp(seed(), steps, kind).len(), steps, "{kind} x{steps}");
            }
        }
    }

    #[test]
    fn base_is_excluded() {
        for kind in RampKind::ALL {
            assert!(!build_ramp(seed(), 5, kind).contains(&seed()), "{kind}");
        }
    }

    // ── Known ramps ─────────────────────────────────────────────────

    #[test]
    fn shades_of_blue() {
        assert_eq!(
            hexes(&build_ramp(seed(), 5, RampKind::Shade)),
            ["#3055a7", "#2b4483", "#243461", "#1d2441", "#131623"]
        );
    }

    #[test]
    fn tints_of_blue() {
        assert_eq!(
            hexes(&build_ramp(seed(), 5, RampKind::Tint)),
            ["#637dd5", "#8695de", "#a6afe7", "#c5c9ef", "#e2e4f7"]
        );
    }

    #[test]
    fn tones_of_blue() {
        let tones = build_ramp(seed(), 5, RampKind::Tone);
        assert_eq!(hexes(&tones), ["#4866bb", "#5567ab", "#5d689b", "#64698b", "#686a7a"]);
        let base_l = seed().to_lab().l;
        for c in &tones {
            assert!((c.to_lab().l - base_l).abs() < 1e-9);
        }
    }

    // ── Extremes ────────────────────────────────────────────────────

    #[test]
    fn black_and_white_bases() {
        for base in [Color::BLACK, Color::WHITE] {
            for kind in RampKind::ALL {
                let ramp = build_ramp(base, 5, kind);
                assert_eq!(ramp.len(), 5);
                for c in ramp {
                    let (r, g, b) = c.to_srgb();
                    assert!([r, g, b].iter().all(|v| (0.0..=1.0).contains(v)));
                }
            }
        }
    }

    #[test]
    fn tones_of_gray_stay_gray() {
        let gray = Color::gray(0.5);
        for c in build_ramp(gray, 4, RampKind::Tone) {
            assert!(c.distance(gray) < 1e-4);
        }
    }

    // ── Properties ──────────────────────────────────────────────────

    fn any_color() -> impl Strategy<Value = Color> {
        (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(r, g, b)| Color::srgb(r, g, b))
    }

    proptest! {
        #[test]
        fn shades_darken(base in any_color(), steps in 1usize..=10) {
            let mut prev = relative_luminance(base);
            for c in build_ramp(base, steps, RampKind::Shade) {
                let lum = relative_luminance(c);
                prop_assert!(lum <= prev + 1e-9, "{} after {}", lum, prev);
                prev = lum;
            }
        }

        #[test]
        fn tints_lighten(base in any_color(), steps in 1usize..=10) {
            let mut prev = relative_luminance(base);
            for c in build_ramp(base, steps, RampKind::Tint) {
                let lum = relative_luminance(c);
                prop_assert!(lum >= prev - 1e-9, "{} after {}", lum, prev);
                prev = lum;
            }
        }

        #[test]
        fn tones_desaturate(base in any_color(), steps in 1usize..=10) {
            let mut prev = base.to_lch().c;
            for c in build_ramp(base, steps, RampKind::Tone) {
                let chroma = c.to_lch().c;
                prop_assert!(chroma <= prev + 1e-6, "{} after {}", chroma, prev);
                prev = chroma;
            }
        }
    }
}
