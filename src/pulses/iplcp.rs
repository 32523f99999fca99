//! IPLCP pulse (improved parametric linear combination pulse)
//!
//! Parametric linear combination of squared-sine and t*sin terms under a
//! Gaussian envelope, raised to the shaping exponent gamma.

use crate::traits::PulseShape;
use crate::utils::math::sinc;
use std::f64::consts::PI;

/// IPLCP pulse with linear-combination weight `mu`, exponent `gamma`,
/// and envelope control `epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct Iplcp {
    /// Linear shaping parameter.
    pub mu: f64,
    /// Exponent for spectral shaping.
    pub gamma: f64,
    /// Gaussian envelope control.
    pub epsilon: f64,
}

impl Default for Iplcp {
    fn default() -> Self {
        Self {
            mu: 1.6,
            gamma: 1.0,
            epsilon: 0.1,
        }
    }
}

impl PulseShape for Iplcp {
    fn amplitude(&self, t: f64, alpha: f64) -> f64 {
        let envelope = (-self.epsilon * PI * PI * t * t).exp();
        let den = PI * PI * alpha * alpha * t * t;
        // The bracketed ratio tends to 1 as t -> 0 (both terms are
        // O(t^2) with coefficients summing to the denominator's).
        let bracket = if den < 1e-12 {
            1.0
        } else {
            let term1 = 4.0 * (1.0 - self.mu) * (PI * alpha * t / 2.0).sin().powi(2);
            let term2 = PI * alpha * self.mu * t * (PI * alpha * t).sin();
            (term1 + term2) / den
        };
        envelope * (sinc(t) * bracket).powf(self.gamma)
    }
}
