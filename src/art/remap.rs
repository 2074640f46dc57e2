use crate::error::{ArtError, Result};

/// Linearly maps `val` from `[src_lo, src_hi]` onto `[dst_lo, dst_hi]`.
///
/// Fails with [`ArtError::InvalidInterval`] when the input interval has zero width.
/// Values outside the input interval are extrapolated, not rejected.
pub fn remap(val: f64, src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64) -> Result<f64> {
    if src_hi == src_lo {
        return Err(ArtError::InvalidInterval { lo: src_lo });
    }
    Ok(lerp(val, src_lo, src_hi, dst_lo, dst_hi))
}

/// Unchecked form of [`remap`]. Callers guarantee `src_hi != src_lo`.
#[inline]
pub(crate) fn lerp(val: f64, src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64) -> f64 {
    dst_lo + (val - src_lo) * (dst_hi - dst_lo) / (src_hi - src_lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_literal_cases() -> anyhow::Result<()> {
        assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 10.0)?, 5.0);
        assert_eq!(remap(5.0, 4.0, 6.0, 0.0, 2.0)?, 1.0);
        assert_eq!(remap(5.0, 4.0, 6.0, 1.0, 2.0)?, 1.5);
        Ok(())
    }

    #[test]
    fn test_zero_width_interval_rejected() {
        let err = remap(1.0, 3.0, 3.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ArtError::InvalidInterval { lo } if lo == 3.0));
    }

    #[test]
    fn test_extrapolates_outside_input() -> anyhow::Result<()> {
        assert_eq!(remap(2.0, 0.0, 1.0, 0.0, 10.0)?, 20.0);
        assert_eq!(remap(-1.0, 0.0, 1.0, 0.0, 10.0)?, -10.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn test_boundaries_map_to_boundaries(
            src_lo in -1000.0f64..1000.0,
            width in 0.001f64..1000.0,
            dst_lo in -1000.0f64..1000.0,
            dst_hi in -1000.0f64..1000.0,
        ) {
            let src_hi = src_lo + width;
            prop_assume!(src_hi != src_lo);

            let lo = remap(src_lo, src_lo, src_hi, dst_lo, dst_hi).unwrap();
            let hi = remap(src_hi, src_lo, src_hi, dst_lo, dst_hi).unwrap();

            prop_assert_eq!(lo, dst_lo);
            let tolerance = 1e-9 * (1.0 + dst_lo.abs() + dst_hi.abs());
            prop_assert!(
                (hi - dst_hi).abs() <= tolerance,
                "remap({}) = {}, expected {}", src_hi, hi, dst_hi
            );
        }
    }
}
