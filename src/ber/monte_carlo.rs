//! Brute-force BPSK-over-AWGN reference simulation
//!
//! Loop-based bit-error counting, independent of the series machinery.
//! Used as a correctness cross-check for the closed-form evaluators in
//! the noise-only limit. Gaussian samples come from a Box-Muller
//! transform over the caller's uniform RNG.

use rand::Rng;
use std::f64::consts::PI;

/// Monte-Carlo simulation configuration.
#[derive(Debug, Clone)]
pub struct AwgnSimConfig {
    /// Bits per simulation run.
    pub bits_per_run: usize,
    /// Independent runs averaged per SNR point.
    pub runs: usize,
}

impl Default for AwgnSimConfig {
    fn default() -> Self {
        Self {
            bits_per_run: 100_000,
            runs: 21,
        }
    }
}

/// One simulated SNR point with its analytical reference.
#[derive(Debug, Clone, Copy)]
pub struct AwgnBerPoint {
    /// Eb/N0 in dB.
    pub snr_db: f64,
    /// Measured bit error rate.
    pub simulated: f64,
    /// 0.5 * erfc(sqrt(Eb/N0)).
    pub theoretical: f64,
}

/// Theoretical BPSK BER over AWGN: `0.5 * erfc(sqrt(Eb/N0))`.
pub fn theoretical_bpsk(snr_db: f64) -> f64 {
    let snr = 10.0_f64.powf(snr_db / 10.0);
    0.5 * libm::erfc(snr.sqrt())
}

/// Simulate antipodal transmission over AWGN at each SNR point.
///
/// Bits map to +-1 (Eb = 1), noise has variance N0/2, and the receiver
/// thresholds at zero. Returns one [`AwgnBerPoint`] per input SNR, in
/// input order.
pub fn simulate_bpsk_awgn<R: Rng + ?Sized>(
    snr_db_range: &[f64],
    cfg: &AwgnSimConfig,
    rng: &mut R,
) -> Vec<AwgnBerPoint> {
    snr_db_range
        .iter()
        .map(|&snr_db| {
            let snr = 10.0_f64.powf(snr_db / 10.0);
            let sigma = (1.0 / (2.0 * snr)).sqrt();
            let mut gauss = BoxMuller::new();
            let mut acc = 0.0;
            for _ in 0..cfg.runs {
                let mut errors = 0usize;
                for _ in 0..cfg.bits_per_run {
                    let bit = rng.gen::<bool>();
                    let s = if bit { 1.0 } else { -1.0 };
                    let y = s + sigma * gauss.next(rng);
                    if (y > 0.0) != bit {
                        errors += 1;
                    }
                }
                acc += errors as f64 / cfg.bits_per_run as f64;
            }
            AwgnBerPoint {
                snr_db,
                simulated: acc / cfg.runs as f64,
                theoretical: theoretical_bpsk(snr_db),
            }
        })
        .collect()
}

/// Box-Muller Gaussian source with the second sample cached.
struct BoxMuller {
    cached: Option<f64>,
}

impl BoxMuller {
    fn new() -> Self {
        Self { cached: None }
    }

    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(z) = self.cached.take() {
            return z;
        }
        // Avoid log(0)
        let u1: f64 = rng.gen::<f64>().max(1e-10);
        let u2: f64 = rng.gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        self.cached = Some(r * theta.sin());
        r * theta.cos()
    }
}
