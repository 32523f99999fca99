//! PulseShape trait - Nyquist-I pulse evaluation
//!
//! Defines the time-domain amplitude of a pulse shape as a pure function
//! of time (in symbol periods) and roll-off. The BER evaluators, the
//! analysis utilities, and the eye-trace builder all consume pulses
//! through this trait.

/// Time-domain pulse shape
///
/// Implementations must be deterministic and side-effect free, and must
/// return a finite value for every finite time argument (removable
/// singularities such as t = 0 are handled by limit substitution, never
/// by returning NaN or infinity).
pub trait PulseShape: Send + Sync {
    /// Pulse amplitude at time `t` (in symbol periods, T = 1)
    /// with roll-off factor `alpha`.
    fn amplitude(&self, t: f64, alpha: f64) -> f64;

    /// Evaluate the pulse at a batch of time points.
    ///
    /// Semantically identical to calling [`amplitude`](Self::amplitude)
    /// point by point; implementations may override it with a vectorized
    /// version but must not change the result.
    fn sample(&self, t: &[f64], alpha: f64) -> Vec<f64> {
        t.iter().map(|&ti| self.amplitude(ti, alpha)).collect()
    }
}

/// Any plain `(t, alpha) -> amplitude` function is a pulse shape.
///
/// This keeps the evaluators open to user-supplied pulses that were
/// never registered as a [`PulseKind`](crate::pulses::PulseKind).
impl<F> PulseShape for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn amplitude(&self, t: f64, alpha: f64) -> f64 {
        self(t, alpha)
    }
}
