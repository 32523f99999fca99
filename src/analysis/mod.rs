//! Pulse analysis utilities
//!
//! Time-axis construction, pulse normalization, magnitude spectra, and
//! eye-trace folding. These feed the figures around the BER engine;
//! only the numeric side lives here, plotting stays external.

pub mod eye;
pub mod spectrum;

use crate::traits::PulseShape;
use thiserror::Error;

/// Analysis-layer errors.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Continuous-domain energy normalization needs the sample spacing
    /// produced by [`t_axis`]; refusing to guess it beats silently
    /// returning an un-normalized pulse.
    #[error("sample spacing required for continuous energy normalization")]
    MissingSampleSpacing,
}

/// Normalization modes for sampled pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Peak |h| scaled to 1.
    Amplitude,
    /// Sum of squares scaled to 1.
    DiscreteEnergy,
    /// Trapezoidal integral of h^2 scaled to 1 (requires dt).
    ContinuousEnergy,
}

/// Symmetric time axis covering [-span, +span] symbol periods at
/// `oversample` samples per symbol. Returns the axis and the sample
/// spacing dt = 1/oversample.
///
/// # Panics
/// Panics if `oversample` is zero.
pub fn t_axis(span: f64, oversample: usize) -> (Vec<f64>, f64) {
    assert!(oversample > 0, "oversample must be positive, got 0");
    let dt = 1.0 / oversample as f64;
    let n = (2.0 * span * oversample as f64).round() as usize + 1;
    let t = (0..n).map(|i| -span + i as f64 * dt).collect();
    (t, dt)
}

/// Sample a pulse over `t`, optionally normalized.
///
/// `dt` is only consulted for [`Normalize::ContinuousEnergy`]; omitting
/// it there fails fast with [`AnalysisError::MissingSampleSpacing`].
/// Near-zero-energy pulses (< 1e-12) are returned unscaled.
pub fn sample_normalized<P: PulseShape + ?Sized>(
    pulse: &P,
    alpha: f64,
    t: &[f64],
    normalize: Option<Normalize>,
    dt: Option<f64>,
) -> Result<Vec<f64>, AnalysisError> {
    let mut h = pulse.sample(t, alpha);
    match normalize {
        None => {}
        Some(Normalize::Amplitude) => {
            let peak = h.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
            rescale(&mut h, peak);
        }
        Some(Normalize::DiscreteEnergy) => {
            let energy: f64 = h.iter().map(|&x| x * x).sum();
            rescale(&mut h, energy.sqrt());
        }
        Some(Normalize::ContinuousEnergy) => {
            let dt = dt.ok_or(AnalysisError::MissingSampleSpacing)?;
            let energy = trapezoid_energy(&h, dt);
            rescale(&mut h, energy.sqrt());
        }
    }
    Ok(h)
}

fn rescale(h: &mut [f64], divisor: f64) {
    if divisor > 1e-12 {
        for x in h.iter_mut() {
            *x /= divisor;
        }
    }
}

/// Trapezoidal integral of h^2 with uniform spacing dt.
pub(crate) fn trapezoid_energy(h: &[f64], dt: f64) -> f64 {
    if h.len() < 2 {
        return 0.0;
    }
    let mut acc = 0.0;
    for w in h.windows(2) {
        acc += (w[0] * w[0] + w[1] * w[1]) / 2.0;
    }
    acc * dt
}
