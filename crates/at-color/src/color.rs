// SPDX-License-Identifier: MIT
//
// autotheme color model: sRGB storage with HSL and CIE perceptual views.
//
// Single-character variable names (r, g, b, h, s, l, t) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// A `Color` is always a point inside the sRGB cube. Every constructor that
// takes values from another space (HSL, Lab, Luv, LCh) projects the result
// back into [0, 1] per channel, so nothing downstream ever observes an
// out-of-gamut or NaN channel. Hue rotations happen in HSL; lightening,
// darkening and blending happen in the CIE spaces so the steps look even.

use std::fmt;
use std::str::FromStr;

use crate::space::{
    self, Lab, Lch, Luv, Oklch, interpolate_hue, lab_to_xyz, linear_srgb_to_oklch,
    linear_srgb_to_xyz, luv_to_xyz, normalize_hue, xyz_to_lab, xyz_to_linear_srgb, xyz_to_luv,
};

/// Chroma below which a color's hue is treated as undefined when blending.
const ACHROMATIC_CHROMA: f64 = 0.000_15;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// The input string is not a `#RGB` or `#RRGGBB` hex code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: expected a hex code like #000 or #000000")]
pub struct ParseColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL with all components on unit scales except hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
    /// Saturation, [0, 1].
    pub s: f64,
    /// Lightness, [0, 1].
    pub l: f64,
}

impl Hsl {
    /// Build the sRGB color for these coordinates (see [`Color::hsl`]).
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::hsl(self.h, self.s, self.l)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with every channel in [0, 1].
///
/// The channels are private so the gamut invariant cannot be broken:
/// [`Color::srgb`] and every conversion constructor clamp on the way in.
///
/// # Examples
///
/// ```
/// use at_color::Color;
///
/// let blue = Color::hex("#3366cc").unwrap();
/// let hsl = blue.to_hsl();
/// assert!((hsl.h - 220.0).abs() < 1e-9);
///
/// // Rotations keep saturation and lightness.
/// let orange = blue.complement();
/// assert_eq!(orange.to_hex(), "#cc9933");
///
/// // Anything out of range is projected back into the cube.
/// let clamped = Color::srgb(1.4, -0.2, 0.5);
/// assert_eq!(clamped.to_rgb8(), (255, 0, 128));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from sRGB channels, clamping each to [0, 1].
    ///
    /// This is the single gamut projection every other constructor funnels
    /// through. NaN channels become 0.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
        }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex code (digits are case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] when the `#` is missing, the length is
    /// not 4 or 7 characters, or a digit is not hexadecimal.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s).ok_or_else(|| ParseColorError { input: s.to_owned() })
    }

    /// Create a color from HSL coordinates.
    ///
    /// The hue wraps around 360°; saturation and lightness are clamped
    /// to [0, 1] before conversion. Lightness 0 and 1 are exactly
    /// [`Color::BLACK`] and [`Color::WHITE`] for every hue and saturation.
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        let l = unit(l);
        if l <= 0.0 {
            return Self::BLACK;
        }
        if l >= 1.0 {
            return Self::WHITE;
        }
        let (r, g, b) = hsl_to_srgb(normalize_hue(h), unit(s), l);
        Self::srgb(r, g, b)
    }

    /// Create a neutral gray with equal channels.
    #[inline]
    #[must_use]
    pub fn gray(value: f64) -> Self {
        Self::srgb(value, value, value)
    }

    /// Create a color from CIE Lab, clamping to the sRGB gamut.
    #[must_use]
    pub fn from_lab(lab: Lab) -> Self {
        let (x, y, z) = lab_to_xyz(lab);
        Self::from_xyz(x, y, z)
    }

    /// Create a color from CIE Luv, clamping to the sRGB gamut.
    #[must_use]
    pub fn from_luv(luv: Luv) -> Self {
        let (x, y, z) = luv_to_xyz(luv);
        Self::from_xyz(x, y, z)
    }

    /// Create a color from CIE LCh, clamping to the sRGB gamut.
    #[must_use]
    pub fn from_lch(lch: Lch) -> Self {
        Self::from_lab(lch.to_lab())
    }

    fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let (r, g, b) = xyz_to_linear_srgb(x, y, z);
        Self::srgb(
            space::linear_to_srgb(r),
            space::linear_to_srgb(g),
            space::linear_to_srgb(b),
        )
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Red channel, [0, 1].
    #[inline]
    #[must_use]
    pub const fn r(self) -> f64 {
        self.r
    }

    /// Green channel, [0, 1].
    #[inline]
    #[must_use]
    pub const fn g(self) -> f64 {
        self.g
    }

    /// Blue channel, [0, 1].
    #[inline]
    #[must_use]
    pub const fn b(self) -> f64 {
        self.b
    }

    /// All three channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_srgb(self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to HSL. Grays report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = srgb_to_hsl(self.r, self.g, self.b);
        Hsl { h, s, l }
    }

    /// Convert to CIE Lab (D65).
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (x, y, z) = self.to_xyz();
        xyz_to_lab(x, y, z)
    }

    /// Convert to CIE Luv (D65).
    #[must_use]
    pub fn to_luv(self) -> Luv {
        let (x, y, z) = self.to_xyz();
        xyz_to_luv(x, y, z)
    }

    /// Convert to CIE LCh (D65).
    #[must_use]
    pub fn to_lch(self) -> Lch {
        self.to_lab().to_lch()
    }

    /// Convert to OKLCH, the form CSS `oklch()` values use.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (r, g, b) = self.to_linear_srgb();
        linear_srgb_to_oklch(r, g, b)
    }

    /// Convert to linear-light sRGB.
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        (
            space::srgb_to_linear(self.r),
            space::srgb_to_linear(self.g),
            space::srgb_to_linear(self.b),
        )
    }

    fn to_xyz(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_linear_srgb();
        linear_srgb_to_xyz(r, g, b)
    }

    /// Convert to 8-bit sRGB with correct rounding.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Space-separated 8-bit channels (`"51 102 204"`), the form CSS expects
    /// inside `rgb(R G B / <alpha>)`.
    #[must_use]
    pub fn to_rgb_triplet(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{r} {g} {b}")
    }

    // ─── HSL Operations ──────────────────────────────────────────────────

    /// Replace the HSL lightness, keeping hue and saturation.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        let hsl = self.to_hsl();
        Self::hsl(hsl.h, hsl.s, l)
    }

    /// Replace the HSL saturation, keeping hue and lightness.
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        let hsl = self.to_hsl();
        Self::hsl(hsl.h, s, hsl.l)
    }

    /// Rotate the HSL hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Self::hsl(hsl.h + degrees, hsl.s, hsl.l)
    }

    /// The complementary color (hue rotated 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    // ─── Perceptual Blends ───────────────────────────────────────────────
    //
    // `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.

    /// Blend in CIE Lab.
    #[must_use]
    pub fn mix_lab(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (a, b) = (self.to_lab(), other.to_lab());
        Self::from_lab(Lab {
            l: lerp(a.l, b.l, t),
            a: lerp(a.a, b.a, t),
            b: lerp(a.b, b.b, t),
        })
    }

    /// Blend in CIE Luv.
    #[must_use]
    pub fn mix_luv(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (a, b) = (self.to_luv(), other.to_luv());
        Self::from_luv(Luv {
            l: lerp(a.l, b.l, t),
            u: lerp(a.u, b.u, t),
            v: lerp(a.v, b.v, t),
        })
    }

    /// Blend in CIE LCh, taking the shortest path around the hue circle.
    ///
    /// When one side is achromatic its hue is borrowed from the other so
    /// the blend does not swing through an arbitrary hue.
    #[must_use]
    pub fn mix_lch(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (a, b) = (self.to_lch(), other.to_lch());
        let (mut h1, mut h2) = (a.h, b.h);
        if a.c <= ACHROMATIC_CHROMA && b.c >= ACHROMATIC_CHROMA {
            h1 = h2;
        } else if b.c <= ACHROMATIC_CHROMA && a.c >= ACHROMATIC_CHROMA {
            h2 = h1;
        }
        Self::from_lch(Lch {
            l: lerp(a.l, b.l, t),
            c: lerp(a.c, b.c, t),
            h: interpolate_hue(h1, h2, t),
        })
    }

    /// Euclidean distance in CIE Lab (Delta E 76, unit lightness scale).
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let (a, b) = (self.to_lab(), other.to_lab());
        let dl = a.l - b.l;
        let da = a.a - b.a;
        let db = a.b - b.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color::srgb({:.4}, {:.4}, {:.4}) /* {} */",
            self.r,
            self.g,
            self.b,
            self.to_hex()
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── HSL ↔ sRGB ──────────────────────────────────────────────────────────────

fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let t1 = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let t2 = 2.0f64.mul_add(l, -t1);
    let h = h / 360.0;

    let channel = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        if 6.0 * t < 1.0 {
            (t1 - t2).mul_add(6.0 * t, t2)
        } else if 2.0 * t < 1.0 {
            t1
        } else if 3.0 * t < 2.0 {
            (t1 - t2).mul_add((2.0 / 3.0 - t) * 6.0, t2)
        } else {
            t2
        }
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

#[allow(clippy::float_cmp)]
fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };

    // The channel comparisons are exact: `max` is one of the three inputs.
    let h = if max == r {
        (g - b) / d
    } else if max == g {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };

    (normalize_hue(h * 60.0), s, l)
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?.as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Project a channel into [0, 1]; NaN maps to 0.
#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
