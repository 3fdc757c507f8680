//! Modular scale for spacing and type-size tokens.

use crate::error::{Error, Result};

/// The golden ratio, φ.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Number of entries a theme's spacing and text scales use.
pub const SCALE_STEPS: usize = 10;

/// `count` entries of a geometric scale around `root`:
/// `[root/ratio, root, root·ratio, root·ratio², …]`.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `ratio` is not a positive finite
/// number or `root` is not finite.
pub fn modular_scale(root: f64, ratio: f64, count: usize) -> Result<Vec<f64>> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::InvalidOption {
            name: "ratio",
            reason: format!("must be a positive number, got {ratio}"),
        });
    }
    if !root.is_finite() {
        return Err(Error::InvalidOption {
            name: "root",
            reason: format!("must be finite, got {root}"),
        });
    }

    let mut scale = Vec::with_capacity(count);
    let mut value = root / ratio;
    for _ in 0..count {
        scale.push(value);
        value *= ratio;
    }
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn golden_scale() {
        let scale = modular_scale(1.0, GOLDEN_RATIO, SCALE_STEPS).unwrap();
        assert_eq!(scale.len(), SCALE_STEPS);
        assert!(approx_eq(scale[0], 0.618_034, 1e-6));
        assert!(approx_eq(scale[1], 1.0, 1e-12));
        assert!(approx_eq(scale[2], GOLDEN_RATIO, 1e-12));
        assert!(approx_eq(scale[9], GOLDEN_RATIO.powi(8), 1e-9));
    }

    #[test]
    fn each_entry_is_ratio_times_the_last() {
        let scale = modular_scale(16.0, 1.25, 6).unwrap();
        for pair in scale.windows(2) {
            assert!(approx_eq(pair[1] / pair[0], 1.25, 1e-12));
        }
    }

    #[test]
    fn golden_ratio_identity() {
        assert!(approx_eq(GOLDEN_RATIO * GOLDEN_RATIO, GOLDEN_RATIO + 1.0, 1e-12));
    }

    #[test]
    fn empty_scale() {
        assert_eq!(modular_scale(1.0, 2.0, 0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn rejects_bad_ratio() {
        for ratio in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let err = modular_scale(1.0, ratio, 4).unwrap_err();
            assert!(matches!(err, Error::InvalidOption { name: "ratio", .. }), "{ratio}");
        }
    }

    #[test]
    fn rejects_non_finite_root() {
        let err = modular_scale(f64::NAN, 2.0, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { name: "root", .. }));
    }
}
