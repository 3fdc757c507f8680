// SPDX-License-Identifier: MIT
//
// at-color — the color model underneath autotheme.
//
// Colors are stored as clamped sRGB and viewed through HSL (for hue
// rotation and lightness stepping) or the CIE perceptual spaces Lab, Luv
// and LCh (for ramps and blends). They are written out as hex or as CSS
// OKLCH. Every constructor projects back into the sRGB cube, so a `Color`
// is always displayable and never NaN.

pub mod color;
pub mod space;

pub use color::{Color, Hsl, ParseColorError};
pub use space::{Lab, Lch, Luv, Oklch, format_oklch};
