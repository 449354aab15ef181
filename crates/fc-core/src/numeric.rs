use crate::FcError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, FcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FcError::NonFinite { what, value: v })
    }
}

/// Round half-up, matching the C idiom `(int)(x + 0.5)` for non-negative
/// inputs. Used when converting fractional duty cycles to sysfs integers.
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Clamp a control signal to the percentage range [0, 100].
pub fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_normal_values() {
        assert_eq!(ensure_finite(5.0, "test").unwrap(), 5.0);
        assert_eq!(ensure_finite(-1.0, "test").unwrap(), -1.0);
        assert!(ensure_finite(f64::INFINITY, "test").is_err());
    }

    #[test]
    fn round_half_up_basic() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.4), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(34.5), 35);
        assert_eq!(round_half_up(254.49), 254);
    }

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(42.0), 42.0);
        assert_eq!(clamp_percent(250.0), 100.0);
    }

    proptest! {
        #[test]
        fn round_half_up_lands_on_a_neighbor(v in -1.0e6_f64..1.0e6) {
            let rounded = round_half_up(v);
            prop_assert!(rounded == v.floor() as i64 || rounded == v.ceil() as i64);
        }

        #[test]
        fn round_half_up_is_monotonic(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(round_half_up(lo) <= round_half_up(hi));
        }
    }
}
