//! Frequency-domain view of a sampled pulse
//!
//! Forward FFT of the time-domain samples, peak-normalized and shifted
//! so zero frequency sits at the center bin. Frequencies are reported
//! in cycles per symbol period for fs = oversample.

use crate::utils::math::linear_to_db;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Magnitude spectrum of a pulse.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency axis, zero-centered, in units of fs/nfft.
    pub freq: Vec<f64>,
    /// Magnitude |H(f)|, normalized so the peak is 1.
    pub mag: Vec<f64>,
    /// 20 log10 |H(f)|, floored at -240 dB.
    pub mag_db: Vec<f64>,
}

/// Compute the shifted magnitude spectrum of `h` with an `nfft`-point
/// FFT at sample rate `fs`. Input longer than `nfft` is truncated,
/// shorter input is zero-padded.
pub fn spectrum(h: &[f64], nfft: usize, fs: f64) -> Spectrum {
    assert!(nfft > 0, "nfft must be positive, got 0");

    let mut buf: Vec<Complex<f64>> = (0..nfft)
        .map(|i| Complex::new(h.get(i).copied().unwrap_or(0.0), 0.0))
        .collect();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nfft);
    fft.process(&mut buf);

    let peak = buf.iter().map(|c| c.norm()).fold(0.0_f64, f64::max);
    let scale = if peak > 0.0 { 1.0 / peak } else { 1.0 };

    // fftshift: rotate so the zero-frequency bin lands at nfft/2.
    let split = nfft - nfft / 2;
    let mut mag = Vec::with_capacity(nfft);
    for i in (split..nfft).chain(0..split) {
        mag.push(buf[i].norm() * scale);
    }

    let freq = (0..nfft)
        .map(|i| (i as i64 - (nfft / 2) as i64) as f64 * fs / nfft as f64)
        .collect();
    let mag_db = mag.iter().map(|&m| linear_to_db(m.max(1e-12))).collect();

    Spectrum { freq, mag, mag_db }
}
