//! ELP pulse (exponential linear pulse)
//!
//! Double-sinc shape under a Gaussian-like envelope controlled by the
//! shaping parameter beta.

use crate::traits::PulseShape;
use crate::utils::math::sinc;
use std::f64::consts::PI;

/// ELP pulse: exp(-pi b t^2 / 2) sinc(t) sinc(a t)
#[derive(Debug, Clone, Copy)]
pub struct Elp {
    /// Envelope shaping parameter.
    pub beta: f64,
}

impl Default for Elp {
    fn default() -> Self {
        Self { beta: 0.1 }
    }
}

impl PulseShape for Elp {
    fn amplitude(&self, t: f64, alpha: f64) -> f64 {
        (-PI * self.beta / 2.0 * t * t).exp() * sinc(t) * sinc(alpha * t)
    }
}
