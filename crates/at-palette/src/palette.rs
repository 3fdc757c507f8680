//! Palette assembly: from a seed and a harmony to a full token set.
//!
//! Pipeline:
//!
//! 1. [`HarmonyKind::generate`] yields the harmony colors.
//! 2. Each harmony color gets shade, tint and tone ramps.
//! 3. One off-white and one off-black background are chosen across all
//!    harmony hues by contrast against the seed.
//! 4. Each harmony color gets a [`TextColorSet`] legible on the off-white
//!    (light mode) and, optionally, on the off-black (dark mode).
//!
//! `harmony`, `light` and `dark` are index-aligned.

use at_color::Color;
use tracing::{debug, debug_span};

use crate::accessible::{make_accessible, pick_accessible};
use crate::config::PaletteOptions;
use crate::contrast::contrast_ratio;
use crate::error::Result;
use crate::harmony::HarmonyKind;
use crate::ramp::{RampKind, build_ramp};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One harmony color and its ramps.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyColorSet {
    pub main: Color,
    /// Darker steps, nearest the base first.
    pub shades: Vec<Color>,
    /// Lighter steps, nearest the base first.
    pub tints: Vec<Color>,
    /// Desaturated steps, nearest the base first.
    pub tones: Vec<Color>,
}

impl HarmonyColorSet {
    #[must_use]
    pub fn new(main: Color, options: &PaletteOptions) -> Self {
        Self {
            main,
            shades: build_ramp(main, options.shades, RampKind::Shade),
            tints: build_ramp(main, options.tints, RampKind::Tint),
            tones: build_ramp(main, options.tones, RampKind::Tone),
        }
    }
}

/// Text colors derived from one harmony color for one background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColorSet {
    /// The harmony color, adjusted until legible.
    pub main: Color,
    /// First legible shade.
    pub dark: Color,
    /// First legible tint.
    pub light: Color,
    /// First legible tone.
    pub neutral: Color,
    /// Fixed near-black (light mode) or near-white (dark mode) of the same hue.
    pub contrast: Color,
}

/// A generated palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub seed: Color,
    pub harmony_kind: HarmonyKind,
    /// Light-mode page background.
    pub off_white: Color,
    /// Dark-mode page background.
    pub off_black: Color,
    pub harmony: Vec<HarmonyColorSet>,
    /// Text colors on `off_white`, one per harmony color.
    pub light: Vec<TextColorSet>,
    /// Text colors on `off_black`; `None` when dark mode is disabled.
    pub dark: Option<Vec<TextColorSet>>,
}

impl Palette {
    /// The harmony main colors, in order.
    pub fn mains(&self) -> impl Iterator<Item = Color> + '_ {
        self.harmony.iter().map(|set| set.main)
    }

    /// Gradient stops: the first harmony color paired with each of the others.
    #[must_use]
    pub fn gradients(&self) -> Vec<(Color, Color)> {
        let mut mains = self.mains();
        let Some(first) = mains.next() else {
            return Vec::new();
        };
        mains.map(|other| (first, other)).collect()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a palette with default options.
#[must_use]
pub fn generate_palette(seed: Color, kind: HarmonyKind) -> Palette {
    build(seed, kind, &PaletteOptions::default())
}

/// Generate a palette with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`](crate::Error::InvalidOption) when
/// `options` fail validation. Nothing is generated in that case.
pub fn generate_palette_with(
    seed: Color,
    kind: HarmonyKind,
    options: &PaletteOptions,
) -> Result<Palette> {
    options.validate()?;
    Ok(build(seed, kind, options))
}

fn build(seed: Color, kind: HarmonyKind, options: &PaletteOptions) -> Palette {
    let _span = debug_span!("generate_palette", seed = %seed, harmony = %kind).entered();

    let colors = kind.generate(seed);
    let (off_white, off_black) = select_backgrounds(
        seed,
        &colors,
        options.off_white_lightness,
        options.off_black_lightness,
    );

    let harmony: Vec<HarmonyColorSet> = colors
        .iter()
        .map(|&c| HarmonyColorSet::new(c, options))
        .collect();

    let light = text_colors(
        &harmony,
        off_white,
        options.target_ratio,
        options.light_contrast_lightness,
    );
    let dark = options.dark_mode.then(|| {
        text_colors(
            &harmony,
            off_black,
            options.target_ratio,
            options.dark_contrast_lightness,
        )
    });

    Palette {
        seed,
        harmony_kind: kind,
        off_white,
        off_black,
        harmony,
        light,
        dark,
    }
}

/// Pick the off-white and off-black backgrounds.
///
/// Every harmony color proposes `HSL(h, s, off_white_lightness)` and
/// `HSL(h, s, off_black_lightness)`; the candidate with the highest
/// contrast against `seed` wins, the earliest one on ties. An empty
/// `harmony` falls back to the seed's own hue.
#[must_use]
pub fn select_backgrounds(
    seed: Color,
    harmony: &[Color],
    off_white_lightness: f64,
    off_black_lightness: f64,
) -> (Color, Color) {
    let (off_white, white_ratio) = best_background(seed, harmony, off_white_lightness);
    let (off_black, black_ratio) = best_background(seed, harmony, off_black_lightness);
    debug!(
        off_white = %off_white,
        off_white_ratio = white_ratio,
        off_black = %off_black,
        off_black_ratio = black_ratio,
        "Selected backgrounds"
    );
    (off_white, off_black)
}

fn best_background(seed: Color, harmony: &[Color], lightness: f64) -> (Color, f64) {
    let mut best: Option<(Color, f64)> = None;
    for c in harmony {
        let hsl = c.to_hsl();
        let candidate = Color::hsl(hsl.h, hsl.s, lightness);
        let ratio = contrast_ratio(seed, candidate);
        if best.is_none_or(|(_, r)| ratio > r) {
            best = Some((candidate, ratio));
        }
    }
    best.unwrap_or_else(|| {
        let fallback = seed.with_lightness(lightness);
        (fallback, contrast_ratio(seed, fallback))
    })
}

fn text_colors(
    harmony: &[HarmonyColorSet],
    background: Color,
    target: f64,
    contrast_lightness: f64,
) -> Vec<TextColorSet> {
    harmony
        .iter()
        .map(|set| {
            let main = make_accessible(set.main, background, target);
            let pick = |ramp: &[Color]| pick_accessible(ramp, background, target).unwrap_or(main);
            let hsl = set.main.to_hsl();
            TextColorSet {
                main,
                dark: pick(&set.shades),
                light: pick(&set.tints),
                neutral: pick(&set.tones),
                contrast: Color::hsl(hsl.h, hsl.s, contrast_lightness),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
