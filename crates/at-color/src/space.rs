// SPDX-License-Identifier: MIT
//
// CIE perceptual spaces: Lab, Luv and LCh (the cylindrical form of Lab).
//
// All three are referenced to the D65 white point and use the unit
// lightness scale (0.0 black to 1.0 white) rather than the 0-100 scale of
// the printed standards. Equal steps in these spaces look roughly equal to
// the eye, which is why ramps and blends are computed here instead of in
// sRGB.
//
// Pipeline:
//
//   sRGB ↔ Linear sRGB ↔ XYZ (D65) ↔ Lab ↔ LCh
//              │                ↘ Luv
//              └→ LMS → Oklab → OKLCH
//
// OKLCH is output-only: it is the CSS form colors are written in, never a
// space the palette math works in.
#![allow(clippy::many_single_char_names)]

use std::fmt;

/// D65 reference white in XYZ.
pub const D65: [f64; 3] = [0.950_47, 1.000_00, 1.088_83];

/// A color in CIE L\*a\*b\* (D65, unit lightness).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Green (negative) to red (positive) axis.
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis.
    pub b: f64,
}

/// A color in CIE L\*u\*v\* (D65, unit lightness).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// A color in CIE LCh(ab): Lab expressed as lightness, chroma and hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Chroma (distance from the gray axis).
    pub c: f64,
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
}

/// A color in OKLCH, the cylindrical form of Oklab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Perceptual lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
    pub c: f64,
    /// Hue angle in degrees, [0, 360). Zero for achromatic colors.
    pub h: f64,
}

impl Lab {
    /// Convert to the cylindrical LCh form.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        let c = self.a.hypot(self.b);
        let h = if c < 1e-8 {
            0.0 // Achromatic: hue is undefined, default to 0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Lch { l: self.l, c, h }
    }
}

impl Lch {
    /// Convert back to rectangular Lab.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let h_rad = self.h.to_radians();
        Lab {
            l: self.l,
            a: self.c * h_rad.cos(),
            b: self.c * h_rad.sin(),
        }
    }
}

/// Format as a CSS `oklch()` value with three decimals per component.
#[must_use]
pub fn format_oklch(oklch: Oklch) -> String {
    format!("oklch({:.3} {:.3} {:.3})", oklch.l, oklch.c, oklch.h)
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_oklch(*self))
    }
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── sRGB ↔ Linear sRGB (Gamma) ───────────────────────────────────────────

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

// ─── Linear sRGB ↔ XYZ ─────────────────────────────────────────────────────

pub(crate) fn linear_srgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let x = 0.180_480_788_403_834_29f64.mul_add(
        b,
        0.412_390_799_265_959_48f64.mul_add(r, 0.357_584_339_383_877_96 * g),
    );
    let y = 0.072_192_315_360_733_715f64.mul_add(
        b,
        0.212_639_005_871_510_36f64.mul_add(r, 0.715_168_678_767_755_93 * g),
    );
    let z = 0.950_532_152_249_660_58f64.mul_add(
        b,
        0.019_330_818_715_591_851f64.mul_add(r, 0.119_194_779_794_625_99 * g),
    );
    (x, y, z)
}

pub(crate) fn xyz_to_linear_srgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = 0.498_610_760_293_003_28f64.mul_add(
        -z,
        3.240_969_941_904_521_4f64.mul_add(x, -(1.537_383_177_570_093_5 * y)),
    );
    let g = 0.041_555_057_407_175_613f64.mul_add(
        z,
        (-0.969_243_636_280_879_83f64).mul_add(x, 1.875_967_501_507_720_7 * y),
    );
    let b = 1.056_971_514_242_878_6f64.mul_add(
        z,
        0.055_630_079_696_993_609f64.mul_add(x, -(0.203_976_958_888_976_57 * y)),
    );
    (r, g, b)
}

// ─── XYZ ↔ Lab ─────────────────────────────────────────────────────────────

const EPSILON: f64 = 6.0 / 29.0 * 6.0 / 29.0 * 6.0 / 29.0;

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

fn lab_finv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

pub(crate) fn xyz_to_lab(x: f64, y: f64, z: f64) -> Lab {
    let fy = lab_f(y / D65[1]);
    Lab {
        l: 1.16f64.mul_add(fy, -0.16),
        a: 5.0 * (lab_f(x / D65[0]) - fy),
        b: 2.0 * (fy - lab_f(z / D65[2])),
    }
}

pub(crate) fn lab_to_xyz(lab: Lab) -> (f64, f64, f64) {
    let l2 = (lab.l + 0.16) / 1.16;
    (
        D65[0] * lab_finv(l2 + lab.a / 5.0),
        D65[1] * lab_finv(l2),
        D65[2] * lab_finv(l2 - lab.b / 2.0),
    )
}

// ─── XYZ ↔ Luv ─────────────────────────────────────────────────────────────

fn xyz_to_uv(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = 3.0f64.mul_add(z, 15.0f64.mul_add(y, x));
    if denom <= 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

pub(crate) fn xyz_to_luv(x: f64, y: f64, z: f64) -> Luv {
    let yr = y / D65[1];
    let l = if yr <= EPSILON {
        yr * (29.0 / 3.0 * 29.0 / 3.0 * 29.0 / 3.0) / 100.0
    } else {
        1.16f64.mul_add(yr.cbrt(), -0.16)
    };
    let (ubis, vbis) = xyz_to_uv(x, y, z);
    let (un, vn) = xyz_to_uv(D65[0], D65[1], D65[2]);
    Luv {
        l,
        u: 13.0 * l * (ubis - un),
        v: 13.0 * l * (vbis - vn),
    }
}

pub(crate) fn luv_to_xyz(luv: Luv) -> (f64, f64, f64) {
    let Luv { l, u, v } = luv;
    let y = if l <= 0.08 {
        D65[1] * l * 100.0 * 3.0 / 29.0 * 3.0 / 29.0 * 3.0 / 29.0
    } else {
        let t = (l + 0.16) / 1.16;
        D65[1] * t * t * t
    };
    if l.abs() < 1e-12 {
        return (0.0, 0.0, 0.0);
    }
    let (un, vn) = xyz_to_uv(D65[0], D65[1], D65[2]);
    let ubis = u / (13.0 * l) + un;
    let vbis = v / (13.0 * l) + vn;
    if vbis.abs() < 1e-12 {
        return (0.0, y, 0.0);
    }
    let x = y * 9.0 * ubis / (4.0 * vbis);
    let z = y * 20.0f64.mul_add(-vbis, 3.0f64.mul_add(-ubis, 12.0)) / (4.0 * vbis);
    (x, y, z)
}

// ─── Linear sRGB → OKLCH ───────────────────────────────────────────────────
//
// Through Ottosson's LMS cone-response matrices, then to polar form.

/// Chroma below which an OKLCH hue is reported as 0.
const OKLCH_ACHROMATIC: f64 = 1e-4;

pub(crate) fn linear_srgb_to_oklch(r: f64, g: f64, b: f64) -> Oklch {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let (l_, m_, s_) = (l.cbrt(), m.cbrt(), s.cbrt());

    let ok_l = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_));
    let ok_a =
        0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_)));
    let ok_b = 0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    let c = ok_a.hypot(ok_b);
    let h = if c < OKLCH_ACHROMATIC { 0.0 } else { normalize_hue(ok_b.atan2(ok_a).to_degrees()) };
    Oklch { l: ok_l, c, h }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
