//! Palette options and theme requests.
//!
//! Both are plain `serde` structs read from TOML strings. Finding and
//! reading the file is the caller's job.
//!
//! ```toml
//! primary = "#3366cc"
//! harmony = "triadic"
//! target-ratio = 4.5
//! dark-mode = false
//! ```

use at_color::Color;
use serde::{Deserialize, Serialize};

use crate::accessible::DEFAULT_TARGET;
use crate::error::{Error, Result};
use crate::harmony::HarmonyKind;
use crate::scale::{GOLDEN_RATIO, SCALE_STEPS, modular_scale};

/// Longest ramp a palette may request.
pub const MAX_RAMP_STEPS: usize = 10;

/// Tunables for [`generate_palette_with`](crate::palette::generate_palette_with).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PaletteOptions {
    /// Minimum contrast for every text color.
    pub target_ratio: f64,
    /// Shade ramp length.
    pub shades: usize,
    /// Tint ramp length.
    pub tints: usize,
    /// Tone ramp length.
    pub tones: usize,
    /// HSL lightness of off-white background candidates.
    pub off_white_lightness: f64,
    /// HSL lightness of off-black background candidates.
    pub off_black_lightness: f64,
    /// HSL lightness of the light-mode `contrast` text color.
    pub light_contrast_lightness: f64,
    /// HSL lightness of the dark-mode `contrast` text color.
    pub dark_contrast_lightness: f64,
    /// Whether dark-mode text colors are built at all.
    pub dark_mode: bool,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET,
            shades: 5,
            tints: 5,
            tones: 4,
            off_white_lightness: 0.97,
            off_black_lightness: 0.03,
            light_contrast_lightness: 0.05,
            dark_contrast_lightness: 0.95,
            dark_mode: true,
        }
    }
}

impl PaletteOptions {
    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=21.0).contains(&self.target_ratio) {
            return Err(invalid(
                "target-ratio",
                format!("must be between 1 and 21, got {}", self.target_ratio),
            ));
        }

        let ramps = [("shades", self.shades), ("tints", self.tints), ("tones", self.tones)];
        for (name, steps) in ramps {
            if !(1..=MAX_RAMP_STEPS).contains(&steps) {
                return Err(invalid(
                    name,
                    format!("must be between 1 and {MAX_RAMP_STEPS}, got {steps}"),
                ));
            }
        }

        for (name, l) in [
            ("off-white-lightness", self.off_white_lightness),
            ("off-black-lightness", self.off_black_lightness),
            ("light-contrast-lightness", self.light_contrast_lightness),
            ("dark-contrast-lightness", self.dark_contrast_lightness),
        ] {
            if !(0.0..=1.0).contains(&l) {
                return Err(invalid(name, format!("must be between 0 and 1, got {l}")));
            }
        }

        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> Error {
    Error::InvalidOption { name, reason }
}

/// A theme request: seed, harmony and palette options.
///
/// `primary` and `harmony` stay optional; choosing a fallback (random or
/// otherwise) is up to the caller through [`resolve`](Self::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeRequest {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub harmony: Option<String>,
    /// Ratio of the spacing/type scale. Defaults to the golden ratio.
    #[serde(default)]
    pub scale_ratio: Option<f64>,
    #[serde(flatten)]
    pub options: PaletteOptions,
}

impl ThemeRequest {
    /// Parse a request from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed TOML or mistyped fields.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The parsed seed color, if one was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when `primary` is not a hex code.
    pub fn seed(&self) -> Result<Option<Color>> {
        self.primary
            .as_deref()
            .map(|hex| Color::hex(hex).map_err(Error::from))
            .transpose()
    }

    /// The parsed harmony kind, if one was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHarmonyKind`] for unknown names.
    pub fn harmony_kind(&self) -> Result<Option<HarmonyKind>> {
        self.harmony.as_deref().map(str::parse).transpose()
    }

    /// Seed and harmony, substituting the given fallbacks for absent fields.
    ///
    /// Present but invalid fields are errors, never replaced.
    ///
    /// # Errors
    ///
    /// See [`seed`](Self::seed) and [`harmony_kind`](Self::harmony_kind).
    pub fn resolve(
        &self,
        fallback_seed: Color,
        fallback_harmony: HarmonyKind,
    ) -> Result<(Color, HarmonyKind)> {
        let seed = self.seed()?.unwrap_or(fallback_seed);
        let harmony = self.harmony_kind()?.unwrap_or(fallback_harmony);
        Ok((seed, harmony))
    }

    /// The spacing/type scale: [`SCALE_STEPS`] entries rooted at 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] for a non-positive ratio.
    pub fn scale(&self) -> Result<Vec<f64>> {
        modular_scale(1.0, self.scale_ratio.unwrap_or(GOLDEN_RATIO), SCALE_STEPS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
