//! Raised cosine pulse
//!
//! The classic Nyquist-I reference shape. Zero ISI at integer symbol
//! offsets when sampled at the ideal instant.

use crate::traits::PulseShape;
use crate::utils::math::sinc;
use std::f64::consts::PI;

/// Raised cosine pulse: sinc(t) cos(pi a t) / (1 - (2 a t)^2)
#[derive(Debug, Clone, Copy, Default)]
pub struct RaisedCosine;

impl PulseShape for RaisedCosine {
    fn amplitude(&self, t: f64, alpha: f64) -> f64 {
        let den = 1.0 - (2.0 * alpha * t) * (2.0 * alpha * t);
        // t = +-1/(2 alpha) is a removable singularity; the limit of the
        // cosine factor there is pi/4.
        let cos_part = if den.abs() < 1e-8 {
            PI / 4.0
        } else {
            (PI * alpha * t).cos() / den
        };
        sinc(t) * cos_part
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_peak() {
        assert!((RaisedCosine.amplitude(0.0, 0.35) - 1.0).abs() < 1e-12);
        assert!((RaisedCosine.amplitude(0.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rolloff_is_sinc() {
        for i in -20..=20 {
            let t = i as f64 * 0.13;
            assert!(
                (RaisedCosine.amplitude(t, 0.0) - sinc(t)).abs() < 1e-12,
                "alpha=0 should reduce to sinc at t={}",
                t
            );
        }
    }

    #[test]
    fn test_nyquist_zero_crossings() {
        // Zero at every nonzero integer symbol offset, any roll-off.
        for alpha in [0.22, 0.35, 0.5] {
            for k in [-3i32, -2, 2, 3] {
                assert!(
                    RaisedCosine.amplitude(k as f64, alpha).abs() < 1e-12,
                    "g({}) != 0 for alpha={}",
                    k,
                    alpha
                );
            }
        }
    }

    #[test]
    fn test_singularity_is_finite() {
        let alpha = 0.35;
        let t = 1.0 / (2.0 * alpha);
        let v = RaisedCosine.amplitude(t, alpha);
        assert!(v.is_finite(), "singular point produced {}", v);
        // Limit value is sinc(t) * pi/4.
        assert!((v - sinc(t) * PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_even_symmetry() {
        for i in 1..40 {
            let t = i as f64 * 0.173;
            let a = RaisedCosine.amplitude(t, 0.35);
            let b = RaisedCosine.amplitude(-t, 0.35);
            assert!((a - b).abs() < 1e-12);
        }
    }
}
