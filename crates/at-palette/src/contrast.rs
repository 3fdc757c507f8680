//! WCAG 2.x contrast ratio and conformance levels.
//!
//! Relative luminance uses the WCAG 2.0 transfer threshold (0.03928), not
//! the sRGB standard's 0.04045. The two differ only below 1/255, but the
//! WCAG constant is what published checkers use.

use at_color::Color;

/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA normal text and AAA large text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;

/// Gamma-expand one sRGB channel the way WCAG defines it.
fn wcag_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0.0, 1.0].
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126f64.mul_add(
        wcag_linear(r),
        0.7152f64.mul_add(wcag_linear(g), 0.0722 * wcag_linear(b)),
    )
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Highest WCAG level a foreground/background pair reaches for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// 3:1 or better (AA for large text only).
    A,
    /// 4.5:1 or better.
    Aa,
    /// 7:1 or better.
    Aaa,
}

impl WcagLevel {
    /// Classify a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            Self::Aaa
        } else if ratio >= AA_NORMAL {
            Self::Aa
        } else if ratio >= AA_LARGE {
            Self::A
        } else {
            Self::Fail
        }
    }
}

/// Full conformance report for one color pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WcagReport {
    pub ratio: f64,
    pub level: WcagLevel,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub passes_aa_large: bool,
    pub passes_aaa_large: bool,
}

/// Check a foreground against a background.
#[must_use]
pub fn check_wcag(fg: Color, bg: Color) -> WcagReport {
    let ratio = contrast_ratio(fg, bg);
    WcagReport {
        ratio,
        level: WcagLevel::from_ratio(ratio),
        passes_aa: ratio >= AA_NORMAL,
        passes_aaa: ratio >= AAA_NORMAL,
        passes_aa_large: ratio >= AA_LARGE,
        passes_aaa_large: ratio >= AA_NORMAL,
    }
}

/// Pure black or pure white, whichever contrasts more with `bg`.
///
/// Black wins ties.
#[must_use]
pub fn best_contrast_color(bg: Color) -> Color {
    if contrast_ratio(Color::BLACK, bg) >= contrast_ratio(Color::WHITE, bg) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
