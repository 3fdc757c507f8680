//! Harmony engine. Derives a small, ordered set of related colors from a
//! seed.
//!
//! Most harmonies are fixed hue rotations in HSL at the seed's saturation
//! and lightness. Three are not: `bi-polar` is a perceptual gradient toward
//! the complement, `lunar-eclipse` blends toward a lifted and a grayed
//! version of the seed, and `aurelian` steps the hue by the golden angle.
//! Unless noted the first color is the seed itself, unmodified.

use std::fmt;
use std::str::FromStr;

use at_color::{Color, Hsl, space::Luv};

use crate::error::Error;
use crate::scale::GOLDEN_RATIO;

/// Hue advance per `aurelian` step: 360° / φ ≈ 222.49°.
pub const AURELIAN_STEP: f64 = 360.0 / GOLDEN_RATIO;

/// Total arc covered by the `retrograde` spread before it is reversed.
pub const RETROGRADE_ARC: f64 = 115.0;

/// The kind of harmony used to derive related colors from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Seed and its opposite (2 colors).
    Complementary,
    /// Seed, +30°, +60° (3 colors).
    Analogous,
    /// 120° spacing (3 colors).
    Triadic,
    /// Two offset complementary pairs plus the seed (5 colors).
    Tetradic,
    /// Seed plus the two neighbours of its complement (3 colors).
    SplitComplementary,
    /// Two complementary pairs 60° apart (4 colors).
    Rectangle,
    /// 90° spacing (4 colors).
    Square,
    /// LCh gradient from the seed to its complement (5 colors).
    BiPolar,
    /// Golden-angle hue stepping (5 colors).
    Aurelian,
    /// Muted, earthy blends of the seed (6 colors).
    LunarEclipse,
    /// An analogous spread in reverse order (5 colors).
    Retrograde,
}

impl HarmonyKind {
    /// All harmony kinds, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
        Self::Rectangle,
        Self::Square,
        Self::BiPolar,
        Self::Aurelian,
        Self::LunarEclipse,
        Self::Retrograde,
    ];

    /// Generate the harmony colors for `seed`.
    ///
    /// The result always has exactly [`count`](Self::count) entries.
    #[must_use]
    pub fn generate(self, seed: Color) -> Vec<Color> {
        generate(self, seed)
    }

    /// Number of colors [`generate`](Self::generate) returns.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Complementary => 2,
            Self::Analogous | Self::Triadic | Self::SplitComplementary => 3,
            Self::Rectangle | Self::Square => 4,
            Self::Tetradic | Self::BiPolar | Self::Aurelian | Self::Retrograde => 5,
            Self::LunarEclipse => 6,
        }
    }

    /// Kebab-case identifier, as used in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::BiPolar => "bi-polar",
            Self::Aurelian => "aurelian",
            Self::LunarEclipse => "lunar-eclipse",
            Self::Retrograde => "retrograde",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::SplitComplementary => "Split-Complementary",
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
            Self::BiPolar => "Bi-Polar",
            Self::Aurelian => "Aurelian",
            Self::LunarEclipse => "Lunar Eclipse",
            Self::Retrograde => "Retrograde",
        }
    }

    /// One-line description for pickers and previews.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Complementary => "Two colors opposite on the color wheel. High contrast, vibrant.",
            Self::Analogous => "Three adjacent colors. Harmonious, serene feel.",
            Self::Triadic => "Three colors equally spaced (120°). Balanced, vibrant.",
            Self::Tetradic => "Two offset complementary pairs around the seed. Rich, lively.",
            Self::SplitComplementary => {
                "Seed plus the two colors adjacent to its complement. Less tension than complementary."
            }
            Self::Rectangle => "Two complementary pairs 60° apart. Versatile, balanced.",
            Self::Square => "Four colors equally spaced (90°). Bold, dynamic.",
            Self::BiPolar => "A perceptual gradient from the seed to its complement. Strong, focused.",
            Self::Aurelian => "Hues stepped by the golden angle. Naturally uneven spread.",
            Self::LunarEclipse => "Lifted and grayed blends of the seed. Muted, earthy.",
            Self::Retrograde => "An analogous spread walked backwards. Unique perspective.",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    ///
    /// `tetratic` is accepted as an alias of `tetradic`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        if lower == "tetratic" {
            return Some(Self::Tetradic);
        }
        Self::ALL.iter().find(|k| k.name() == lower).copied()
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::InvalidHarmonyKind(s.to_owned()))
    }
}

/// Spread `count` colors evenly over `arc` degrees, starting at the seed's
/// hue and keeping its saturation and lightness.
///
/// This is the spread `retrograde` reverses.
#[must_use]
pub fn analogous_spread(seed: Color, count: usize, arc: f64) -> Vec<Color> {
    let Hsl { h, s, l } = seed.to_hsl();
    match count {
        0 => Vec::new(),
        1 => vec![Color::hsl(h, s, l)],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| Color::hsl((i as f64 / last).mul_add(arc, h), s, l))
                .collect()
        }
    }
}

/// A harmony outside the built-in kinds: `count` colors whose hues are the
/// seed's hue plus `offset(i)` degrees, at the seed's saturation and
/// lightness.
#[must_use]
pub fn custom(seed: Color, count: usize, offset: impl Fn(usize) -> f64) -> Vec<Color> {
    let Hsl { h, s, l } = seed.to_hsl();
    (0..count).map(|i| Color::hsl(h + offset(i), s, l)).collect()
}

/// Core harmony dispatch.
fn generate(kind: HarmonyKind, seed: Color) -> Vec<Color> {
    let Hsl { h, s, l } = seed.to_hsl();
    let rotate = |degrees: f64| Color::hsl(h + degrees, s, l);

    match kind {
        HarmonyKind::Complementary => vec![seed, rotate(180.0)],
        HarmonyKind::Analogous => vec![seed, rotate(30.0), rotate(60.0)],
        HarmonyKind::Triadic => vec![seed, rotate(120.0), rotate(240.0)],
        HarmonyKind::Tetradic => {
            vec![seed, rotate(30.0), rotate(180.0), rotate(210.0), rotate(330.0)]
        }
        HarmonyKind::SplitComplementary => vec![seed, rotate(210.0), rotate(150.0)],
        HarmonyKind::Rectangle => vec![seed, rotate(60.0), rotate(180.0), rotate(240.0)],
        HarmonyKind::Square => vec![seed, rotate(90.0), rotate(180.0), rotate(270.0)],
        HarmonyKind::BiPolar => {
            const STEPS: usize = 5;
            let complement = rotate(180.0);
            (0..STEPS)
                .map(|i| seed.mix_lch(complement, i as f64 / (STEPS - 1) as f64))
                .collect()
        }
        HarmonyKind::Aurelian => (0..5).map(|i| rotate(f64::from(i) * AURELIAN_STEP)).collect(),
        HarmonyKind::LunarEclipse => {
            // Three blends toward a lifted copy (Luv lightness + 0.3), then
            // three toward the mid-gray of the same hue.
            const BLENDS: [f64; 3] = [0.0, 0.5, 1.0];
            let luv = seed.to_luv();
            let lifted = Color::from_luv(Luv { l: luv.l + 0.3, ..luv });
            let gray = Color::hsl(h, 0.0, 0.5);

            let mut v = Vec::with_capacity(6);
            v.extend(BLENDS.iter().map(|&t| seed.mix_luv(lifted, t)));
            v.extend(BLENDS.iter().map(|&t| seed.mix_lab(gray, t)));
            v
        }
        HarmonyKind::Retrograde => {
            let mut v = analogous_spread(seed, 5, RETROGRADE_ARC);
            v.reverse();
            v
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
