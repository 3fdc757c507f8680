//! Bounded lightness search for a legible foreground.
//!
//! The candidate's HSL lightness moves in fixed steps away from the
//! background until the target ratio is met or lightness saturates. When
//! that end of the axis cannot reach the target, the same walk runs toward
//! the other end. Each walk takes at most [`MAX_STEPS`] steps, which at
//! [`LIGHTNESS_STEP`] spans the full range, so the search always
//! terminates. A target neither end can reach is reported as
//! [`Outcome::ConvergenceLimitReached`] with the better boundary color
//! (pure black or pure white), never as an error.

use at_color::{Color, Hsl};
use tracing::{debug, trace};

use crate::contrast::contrast_ratio;

/// Default minimum contrast ratio (WCAG AAA for normal text).
pub const DEFAULT_TARGET: f64 = 7.0;

/// Lightness change per step.
pub const LIGHTNESS_STEP: f64 = 0.1;

/// Iteration cap per direction. 10 × 0.1 covers the whole lightness axis.
pub const MAX_STEPS: usize = 10;

/// How an adjustment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The returned color meets the target.
    Met,
    /// Neither lightness 0 nor 1 meets the target.
    ConvergenceLimitReached,
}

/// Result of [`adjust`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub color: Color,
    pub ratio: f64,
    /// Lightness steps taken over both directions (0 when the input
    /// already passed).
    pub steps: usize,
    pub outcome: Outcome,
}

impl Adjustment {
    #[must_use]
    pub const fn is_met(&self) -> bool {
        matches!(self.outcome, Outcome::Met)
    }
}

/// Step `color`'s lightness away from `background` until the contrast
/// ratio reaches `target`.
///
/// A lighter-than-background color is lightened, a darker one darkened.
/// When both lightnesses are equal the color moves toward the far end of
/// the axis (lighter on dark backgrounds, darker on light ones). If that
/// end falls short, the walk restarts from `color` in the other direction.
#[must_use]
pub fn adjust(color: Color, background: Color, target: f64) -> Adjustment {
    let ratio = contrast_ratio(color, background);
    if ratio >= target {
        return Adjustment { color, ratio, steps: 0, outcome: Outcome::Met };
    }

    let hsl = color.to_hsl();
    let bg_l = background.to_hsl().l;
    let lighten = hsl.l > bg_l || ((hsl.l - bg_l).abs() < f64::EPSILON && bg_l < 0.5);

    let first = walk(hsl, background, target, lighten);
    if first.is_met() {
        return first;
    }

    let second = walk(hsl, background, target, !lighten);
    let steps = first.steps + second.steps;
    if second.is_met() {
        return Adjustment { steps, ..second };
    }

    let best = if first.ratio >= second.ratio { first } else { second };
    debug!(
        color = %best.color,
        background = %background,
        ratio = best.ratio,
        target = target,
        steps = steps,
        "Contrast target unreachable, returning gamut boundary"
    );
    Adjustment { steps, ..best }
}

/// One bounded walk from `hsl` toward lightness 1 (`lighten`) or 0.
fn walk(hsl: Hsl, background: Color, target: f64, lighten: bool) -> Adjustment {
    let (delta, bound) = if lighten { (LIGHTNESS_STEP, 1.0) } else { (-LIGHTNESS_STEP, 0.0) };

    let mut l = hsl.l;
    let mut steps = 0;
    while steps < MAX_STEPS && (l - bound).abs() >= f64::EPSILON {
        steps += 1;
        l = (l + delta).clamp(0.0, 1.0);
        let candidate = Color::hsl(hsl.h, hsl.s, l);
        let ratio = contrast_ratio(candidate, background);
        trace!(step = steps, lightness = l, ratio = ratio, "Adjusted lightness");
        if ratio >= target {
            return Adjustment { color: candidate, ratio, steps, outcome: Outcome::Met };
        }
    }

    // Snap to the exact boundary; Color::hsl maps l = 0 / 1 to pure black / white.
    let color = Color::hsl(hsl.h, hsl.s, bound);
    let ratio = contrast_ratio(color, background);
    let outcome = if ratio >= target { Outcome::Met } else { Outcome::ConvergenceLimitReached };
    Adjustment { color, ratio, steps, outcome }
}

/// [`adjust`], keeping only the color.
#[must_use]
pub fn make_accessible(color: Color, background: Color, target: f64) -> Color {
    adjust(color, background, target).color
}

/// The first candidate meeting `target` against `background`.
///
/// Falls back to adjusting the first candidate when none qualify. Returns
/// `None` only for an empty slice.
#[must_use]
pub fn pick_accessible(candidates: &[Color], background: Color, target: f64) -> Option<Color> {
    let first = *candidates.first()?;
    let picked = candidates
        .iter()
        .copied()
        .find(|&c| contrast_ratio(c, background) >= target)
        .unwrap_or_else(|| make_accessible(first, background, target));
    Some(picked)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
