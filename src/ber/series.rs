//! Truncated Fourier-series BER machinery
//!
//! One odd-harmonic series underlies all three closed-form error models
//! (Craig's ISI expression, Beaulieu's CCI expression, and their joint
//! form); the variants differ only in the interference-factor product
//! attached to each term.

use std::f64::consts::PI;

/// Configuration shared by the closed-form evaluators.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// ISI symbol span; the half-span is `nbits / 2` symbols each side.
    pub nbits: usize,
    /// Exclusive upper bound on the odd harmonic index. `harmonics = 100`
    /// sums m = 1, 3, ..., 99 (50 terms) - this is a bound, not a term
    /// count.
    pub harmonics: usize,
    /// Noise angular standard deviation of the series expansion.
    pub omega: f64,
    /// Timing offsets tau/T at which BER is evaluated.
    pub offsets: Vec<f64>,
    /// Number of co-channel interferers (CCI and joint models only).
    pub interferers: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            nbits: 1024,
            harmonics: 100,
            omega: 0.10,
            offsets: vec![0.05, 0.10, 0.20, 0.25],
            interferers: 2,
        }
    }
}

/// Odd harmonic indices 1, 3, 5, ... strictly below `bound`.
pub fn odd_harmonics(bound: usize) -> impl Iterator<Item = usize> {
    (1..bound).step_by(2)
}

/// Evaluate one truncated series:
///
/// `0.5 - (2/pi) sum_m exp(-(m w)^2 / 2) / m * sin(m w g0)
///   * prod_k cos(m w gk) * prod_i J0(m w r_i)`
///
/// Empty tap slices contribute a product of 1, so the same sum serves
/// the ISI-only, CCI-only, and joint models. The result is a series
/// approximation and is deliberately not clamped to [0, 1]; small
/// excursions outside that range at extreme parameters are an expected
/// truncation artifact.
pub fn series_ber(g0: f64, isi_taps: &[f64], cci_taps: &[f64], omega: f64, harmonics: usize) -> f64 {
    let mut sum = 0.0;
    for m in odd_harmonics(harmonics) {
        let m_omega = m as f64 * omega;
        let mut term = (-(m_omega * m_omega) / 2.0).exp() / m as f64 * (m_omega * g0).sin();
        for &gk in isi_taps {
            term *= (m_omega * gk).cos();
        }
        for &r in cci_taps {
            term *= libm::j0(m_omega * r);
        }
        sum += term;
    }
    0.5 - (2.0 / PI) * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_harmonic_count() {
        // M = 100 is an exclusive bound: exactly 50 terms, last one 99.
        let m: Vec<usize> = odd_harmonics(100).collect();
        assert_eq!(m.len(), 50);
        assert_eq!(m[0], 1);
        assert_eq!(*m.last().unwrap(), 99);
        assert!(m.iter().all(|&x| x % 2 == 1));
    }

    #[test]
    fn test_odd_harmonic_bound_edges() {
        assert_eq!(odd_harmonics(0).count(), 0);
        assert_eq!(odd_harmonics(1).count(), 0);
        assert_eq!(odd_harmonics(2).count(), 1);
        // Odd bound: 99 excluded, last term 97.
        assert_eq!(odd_harmonics(99).last(), Some(97));
    }

    #[test]
    fn test_empty_taps_match_reference() {
        let g0 = 3.1;
        let omega = 0.1;
        let mut expected = 0.0;
        let mut m = 1usize;
        while m < 100 {
            let mw = m as f64 * omega;
            expected += (-(mw * mw) / 2.0).exp() / m as f64 * (mw * g0).sin();
            m += 2;
        }
        let expected = 0.5 - (2.0 / PI) * expected;
        let got = series_ber(g0, &[], &[], omega, 100);
        assert!((got - expected).abs() < 1e-15);
    }

    #[test]
    fn test_no_main_tap_gives_half() {
        // g0 = 0 kills every sine term: BER = 0.5 exactly.
        assert_eq!(series_ber(0.0, &[], &[], 0.1, 100), 0.5);
        assert_eq!(series_ber(0.0, &[0.3, -0.2], &[0.1], 0.1, 100), 0.5);
    }

    #[test]
    fn test_stronger_signal_lower_ber() {
        let weak = series_ber(1.0, &[], &[], 0.1, 100);
        let strong = series_ber(3.0, &[], &[], 0.1, 100);
        assert!(strong < weak, "{} !< {}", strong, weak);
    }

    #[test]
    fn test_interference_raises_ber() {
        let clean = series_ber(3.0, &[], &[], 0.1, 100);
        let isi = series_ber(3.0, &[0.8, -0.6, 0.4], &[], 0.1, 100);
        let cci = series_ber(3.0, &[], &[0.9, -0.9], 0.1, 100);
        assert!(isi > clean);
        assert!(cci > clean);
    }

    #[test]
    fn test_default_config() {
        let cfg = SeriesConfig::default();
        assert_eq!(cfg.nbits, 1024);
        assert_eq!(cfg.harmonics, 100);
        assert_eq!(cfg.omega, 0.10);
        assert_eq!(cfg.offsets, vec![0.05, 0.10, 0.20, 0.25]);
        assert_eq!(cfg.interferers, 2);
    }
}
