// SPDX-License-Identifier: MIT
//
// autotheme — accessible palettes from a seed color and a harmony rule.
//
// This crate is the string-level entry point that ties the workspace
// together:
//
//   at-color   → sRGB/HSL/Lab/Luv/LCh color model, hex parsing
//   at-palette → harmonies, ramps, WCAG contrast, accessible text colors
//
// Inputs arrive as strings (a hex seed, a harmony name, or a TOML theme
// request) and are validated up front: a bad seed or an unknown harmony
// fails before any color math runs, so callers never see a partial
// palette. Choosing a random seed or harmony when none is given is left
// to the caller, which passes its choice in as a fallback.

pub use at_color::{Color, ParseColorError};
pub use at_palette::{
    Error, HarmonyColorSet, HarmonyKind, Palette, PaletteOptions, Result, TextColorSet,
    ThemeRequest, contrast_ratio, generate_palette, generate_palette_with,
};

use tracing::debug;

/// A palette together with the modular scale used for spacing and type.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub scale: Vec<f64>,
}

/// Generate a palette from a hex seed and a harmony name, with default
/// options.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] or [`Error::InvalidHarmonyKind`].
pub fn generate(primary: &str, harmony: &str) -> Result<Palette> {
    let seed = Color::hex(primary)?;
    let kind: HarmonyKind = harmony.parse()?;
    Ok(generate_palette(seed, kind))
}

/// Build a theme from a TOML request.
///
/// `fallback_seed` and `fallback_harmony` are used only for fields the
/// request leaves out.
///
/// # Errors
///
/// Returns [`Error::Config`] for malformed TOML, [`Error::InvalidColor`] or
/// [`Error::InvalidHarmonyKind`] for bad fields, and
/// [`Error::InvalidOption`] for out-of-range options.
pub fn theme_from_toml(
    source: &str,
    fallback_seed: Color,
    fallback_harmony: HarmonyKind,
) -> Result<Theme> {
    let request = ThemeRequest::from_toml(source)?;
    let (seed, kind) = request.resolve(fallback_seed, fallback_harmony)?;
    debug!(
        seed = %seed,
        harmony = %kind,
        seed_given = request.primary.is_some(),
        harmony_given = request.harmony.is_some(),
        "Resolved theme request"
    );

    let palette = generate_palette_with(seed, kind, &request.options)?;
    let scale = request.scale()?;
    Ok(Theme { palette, scale })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generate_parses_both_inputs() {
        let p = generate("#36c", "complementary").unwrap();
        assert_eq!(p.seed, Color::rgb8(0x33, 0x66, 0xcc));
        assert_eq!(p.harmony_kind, HarmonyKind::Complementary);
    }

    #[test]
    fn bad_seed_is_reported_first() {
        let err = generate("nope", "nope").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[test]
    fn theme_carries_scale() {
        let theme = theme_from_toml("", Color::WHITE, HarmonyKind::Square).unwrap();
        assert_eq!(theme.scale.len(), 10);
        assert_eq!(theme.palette.harmony_kind, HarmonyKind::Square);
    }
}
