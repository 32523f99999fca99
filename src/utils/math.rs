//! Small DSP math helpers

use std::f64::consts::PI;

/// Convert dB to linear amplitude scale
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert linear amplitude to dB scale
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    20.0 * linear.log10()
}

/// Normalized sinc: sin(pi x) / (pi x), with sinc(0) = 1
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-10 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_conversion() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-10);
        assert!((db_to_linear(20.0) - 10.0).abs() < 1e-10);
        assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-10);
        assert!((linear_to_db(10.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_sinc_center() {
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn test_sinc_zero_crossings() {
        for k in 1..5 {
            assert!(sinc(k as f64).abs() < 1e-12, "sinc({}) should be 0", k);
        }
    }

    #[test]
    fn test_sinc_half() {
        // sinc(1/2) = 2/pi
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-12);
    }
}
