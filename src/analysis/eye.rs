//! Eye-trace construction for antipodal signaling
//!
//! Shapes a random +-1 symbol stream with a pulse, then folds the
//! waveform into fixed-width traces spanning a couple of symbol
//! periods. The trace matrix is the numeric payload of an eye diagram;
//! rendering is left to the caller.

use crate::analysis::{t_axis, trapezoid_energy};
use crate::traits::PulseShape;
use rand::Rng;

/// Eye-trace construction parameters.
#[derive(Debug, Clone)]
pub struct EyeConfig {
    /// Roll-off factor handed to the pulse.
    pub alpha: f64,
    /// Samples per symbol period.
    pub samples_per_symbol: usize,
    /// Pulse filter half-span in symbol periods.
    pub span: f64,
    /// Number of random antipodal symbols to shape.
    pub n_symbols: usize,
    /// Width of one eye trace in symbol periods.
    pub eye_span: f64,
    /// Cap on the number of traces kept.
    pub max_traces: usize,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            alpha: 0.22,
            samples_per_symbol: 10,
            span: 10.0,
            n_symbols: 100_000,
            eye_span: 2.0,
            max_traces: 500,
        }
    }
}

/// Folded eye traces with their shared time axis.
#[derive(Debug, Clone)]
pub struct EyeTraces {
    traces: Vec<Vec<f64>>,
    time: Vec<f64>,
}

impl EyeTraces {
    /// All traces; each has the same length as [`time`](Self::time).
    pub fn traces(&self) -> &[Vec<f64>] {
        &self.traces
    }

    /// Trace-local time axis, centered on zero.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn num_traces(&self) -> usize {
        self.traces.len()
    }

    /// Largest |amplitude| over all traces.
    pub fn peak(&self) -> f64 {
        self.traces
            .iter()
            .flat_map(|tr| tr.iter())
            .fold(0.0_f64, |m, &x| m.max(x.abs()))
    }
}

/// Build eye traces for `pulse` from a random antipodal symbol stream.
pub fn eye_traces<P, R>(pulse: &P, cfg: &EyeConfig, rng: &mut R) -> EyeTraces
where
    P: PulseShape + ?Sized,
    R: Rng + ?Sized,
{
    let sps = cfg.samples_per_symbol.max(1);
    let (t, dt) = t_axis(cfg.span, sps);
    let mut h = pulse.sample(&t, cfg.alpha);
    let energy = trapezoid_energy(&h, dt);
    if energy > 1e-12 {
        let norm = energy.sqrt();
        for x in h.iter_mut() {
            *x /= norm;
        }
    }

    // Shaped waveform: sum of +-h shifted by one symbol per bit.
    let mut signal = vec![0.0; cfg.n_symbols * sps + h.len()];
    for s in 0..cfg.n_symbols {
        let a = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let base = s * sps;
        for (j, &hj) in h.iter().enumerate() {
            signal[base + j] += a * hj;
        }
    }

    let trace_len = ((cfg.eye_span * sps as f64).round() as usize).max(1);
    let n_traces = (signal.len() / trace_len).min(cfg.max_traces);
    let traces = (0..n_traces)
        .map(|i| signal[i * trace_len..(i + 1) * trace_len].to_vec())
        .collect();

    let time = (0..trace_len)
        .map(|i| -cfg.eye_span / 2.0 + i as f64 / sps as f64)
        .collect();

    EyeTraces { traces, time }
}
