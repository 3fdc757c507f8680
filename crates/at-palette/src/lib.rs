//! # at-palette — accessible palette engine
//!
//! Builds a complete, contrast-checked color palette from one seed color
//! and a named harmony. The same seed and harmony always produce the same
//! palette; nothing here is random or stateful.
//!
//! # Architecture
//!
//! ```text
//! seed + HarmonyKind (+ PaletteOptions)
//!     │
//!     ▼
//! harmony.rs:    derive 2–6 related colors (hue math, perceptual blends)
//!     │
//!     ▼
//! ramp.rs:       shades / tints / tones per harmony color (CIE Lab)
//!     │
//!     ▼
//! palette.rs:    pick off-white / off-black backgrounds
//!     │
//!     ▼
//! accessible.rs: step lightness until text clears the target ratio
//!     │           (contrast.rs: WCAG relative luminance + ratio)
//!     ▼
//! Palette { harmony, light, dark }
//! ```
//!
//! `config.rs` reads options from TOML; `scale.rs` supplies the modular
//! spacing scale that sits alongside the colors in a theme.

// Mathematical code uses small integer-to-float casts (loop indices, steps).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod accessible;
pub mod config;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod ramp;
pub mod scale;

pub use accessible::{Adjustment, Outcome, adjust, make_accessible, pick_accessible};
pub use config::{PaletteOptions, ThemeRequest};
pub use contrast::{WcagLevel, WcagReport, best_contrast_color, check_wcag, contrast_ratio};
pub use error::{Error, Result};
pub use harmony::{HarmonyKind, custom as custom_harmony};
pub use palette::{
    HarmonyColorSet, Palette, TextColorSet, generate_palette, generate_palette_with,
    select_backgrounds,
};
pub use ramp::{RampKind, build_ramp};
pub use scale::{GOLDEN_RATIO, modular_scale};
