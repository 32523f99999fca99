//! Experiment driver
//!
//! Builds the pulse x SNR x alpha (x SIR x L x truncation) configuration
//! grids as explicit cartesian products, dispatches each configuration
//! to the closed-form evaluators, and collects results keyed by a
//! structured record. Keys are collision-free across the full product
//! space; inserting a duplicate is a hard failure, never an overwrite.

pub mod table;

use crate::ber::{ber_cci, ber_isi, ber_isi_cci, SeriesConfig};
use crate::pulses::{truncate, PulseKind};
use rand::Rng;

/// Structured experiment key: every varying parameter of a
/// configuration, no string encoding. The legacy string form is
/// available via [`label`](SweepKey::label) for export compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepKey {
    pub pulse: PulseKind,
    pub snr_db: f64,
    pub sir_db: Option<f64>,
    pub alpha: f64,
    pub interferers: Option<usize>,
    pub truncation: Option<f64>,
    pub joint: bool,
}

impl SweepKey {
    /// Key for an ISI-only configuration.
    pub fn isi(pulse: PulseKind, snr_db: f64, alpha: f64) -> Self {
        Self {
            pulse,
            snr_db,
            sir_db: None,
            alpha,
            interferers: None,
            truncation: None,
            joint: false,
        }
    }

    /// Key for a CCI-only configuration.
    pub fn cci(pulse: PulseKind, snr_db: f64, sir_db: f64, alpha: f64, interferers: usize) -> Self {
        Self {
            pulse,
            snr_db,
            sir_db: Some(sir_db),
            alpha,
            interferers: Some(interferers),
            truncation: None,
            joint: false,
        }
    }

    /// Key for a joint ISI+CCI configuration.
    pub fn joint(pulse: PulseKind, snr_db: f64, sir_db: f64, alpha: f64, interferers: usize) -> Self {
        Self {
            joint: true,
            ..Self::cci(pulse, snr_db, sir_db, alpha, interferers)
        }
    }

    /// Mark the configuration as using a pulse truncated at `t_max`.
    pub fn truncated(mut self, t_max: f64) -> Self {
        self.truncation = Some(t_max);
        self
    }

    /// Legacy string encoding (`pulse_SNR.._SIR.._alpha.._L.._joint_trunc..`),
    /// for the presentation boundary only.
    pub fn label(&self) -> String {
        let mut s = format!("{}_SNR{:?}", self.pulse.name(), self.snr_db);
        if let Some(sir) = self.sir_db {
            s.push_str(&format!("_SIR{:?}", sir));
        }
        s.push_str(&format!("_alpha{:?}", self.alpha));
        if let Some(l) = self.interferers {
            s.push_str(&format!("_L{}", l));
        }
        if self.joint {
            s.push_str("_joint");
        }
        if let Some(t) = self.truncation {
            s.push_str(&format!("_trunc{}", t as i64));
        }
        s
    }
}

/// Insertion-ordered collection of (key, BER-per-offset) results.
#[derive(Debug, Clone, Default)]
pub struct SweepResults {
    entries: Vec<(SweepKey, Vec<f64>)>,
}

impl SweepResults {
    /// Insert one configuration's result.
    ///
    /// # Panics
    /// Panics if the key is already present: silently overwriting a
    /// configuration would corrupt the table downstream.
    pub fn insert(&mut self, key: SweepKey, ber: Vec<f64>) {
        assert!(
            !self.entries.iter().any(|(k, _)| *k == key),
            "duplicate sweep key: {}",
            key.label()
        );
        self.entries.push((key, ber));
    }

    /// Merge another result set into this one (same uniqueness rule).
    pub fn extend(&mut self, other: SweepResults) {
        for (key, ber) in other.entries {
            self.insert(key, ber);
        }
    }

    /// Look up one configuration.
    pub fn get(&self, key: &SweepKey) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, ber)| ber.as_slice())
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[(SweepKey, Vec<f64>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parameter grids for the experiment sweeps.
///
/// Defaults reproduce the paper's tables: SNR {10, 15} dB,
/// alpha {0.22, 0.35, 0.50}, SIR {10, 20} dB, L {2, 6}, truncation
/// {5, 10} symbol periods, over all four registered pulses.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub pulses: Vec<PulseKind>,
    pub snr_values: Vec<f64>,
    pub alpha_values: Vec<f64>,
    pub sir_values: Vec<f64>,
    pub l_values: Vec<usize>,
    pub truncation_limits: Vec<f64>,
    pub series: SeriesConfig,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            pulses: PulseKind::ALL.to_vec(),
            snr_values: vec![10.0, 15.0],
            alpha_values: vec![0.22, 0.35, 0.50],
            sir_values: vec![10.0, 20.0],
            l_values: vec![2, 6],
            truncation_limits: vec![5.0, 10.0],
            series: SeriesConfig::default(),
        }
    }
}

/// ISI sweep over pulse x SNR x alpha.
pub fn run_isi_sweep<R: Rng + ?Sized>(grid: &SweepGrid, rng: &mut R) -> SweepResults {
    let mut results = SweepResults::default();
    for &pulse in &grid.pulses {
        for &snr in &grid.snr_values {
            for &alpha in &grid.alpha_values {
                let ber = ber_isi(&pulse, alpha, snr, &grid.series, rng);
                results.insert(SweepKey::isi(pulse, snr, alpha), ber);
            }
        }
    }
    results
}

/// CCI sweep over pulse x SIR x alpha x L at a fixed SNR.
pub fn run_cci_sweep<R: Rng + ?Sized>(grid: &SweepGrid, snr_db: f64, rng: &mut R) -> SweepResults {
    let mut results = SweepResults::default();
    for &pulse in &grid.pulses {
        for &sir in &grid.sir_values {
            for &alpha in &grid.alpha_values {
                for &l in &grid.l_values {
                    let cfg = SeriesConfig {
                        interferers: l,
                        ..grid.series.clone()
                    };
                    let ber = ber_cci(&pulse, alpha, snr_db, sir, &cfg, rng);
                    results.insert(SweepKey::cci(pulse, snr_db, sir, alpha, l), ber);
                }
            }
        }
    }
    results
}

/// Joint ISI+CCI sweep over pulse x alpha at fixed SNR, SIR, and L.
pub fn run_joint_sweep<R: Rng + ?Sized>(
    grid: &SweepGrid,
    snr_db: f64,
    sir_db: f64,
    interferers: usize,
    rng: &mut R,
) -> SweepResults {
    let mut results = SweepResults::default();
    let cfg = SeriesConfig {
        interferers,
        ..grid.series.clone()
    };
    for &pulse in &grid.pulses {
        for &alpha in &grid.alpha_values {
            let ber = ber_isi_cci(&pulse, alpha, snr_db, sir_db, &cfg, rng);
            results.insert(SweepKey::joint(pulse, snr_db, sir_db, alpha, interferers), ber);
        }
    }
    results
}

/// ISI sweep with hard-truncated pulses, over t_max x pulse x alpha.
pub fn run_truncated_isi_sweep<R: Rng + ?Sized>(
    grid: &SweepGrid,
    snr_db: f64,
    rng: &mut R,
) -> SweepResults {
    let mut results = SweepResults::default();
    for &t_max in &grid.truncation_limits {
        for &pulse in &grid.pulses {
            for &alpha in &grid.alpha_values {
                let ber = ber_isi(&truncate(pulse, t_max), alpha, snr_db, &grid.series, rng);
                results.insert(SweepKey::isi(pulse, snr_db, alpha).truncated(t_max), ber);
            }
        }
    }
    results
}

/// CCI sweep with hard-truncated pulses at fixed SNR, SIR, and L.
pub fn run_truncated_cci_sweep<R: Rng + ?Sized>(
    grid: &SweepGrid,
    snr_db: f64,
    sir_db: f64,
    interferers: usize,
    rng: &mut R,
) -> SweepResults {
    let mut results = SweepResults::default();
    let cfg = SeriesConfig {
        interferers,
        ..grid.series.clone()
    };
    for &t_max in &grid.truncation_limits {
        for &pulse in &grid.pulses {
            for &alpha in &grid.alpha_values {
                let ber = ber_cci(&truncate(pulse, t_max), alpha, snr_db, sir_db, &cfg, rng);
                results.insert(
                    SweepKey::cci(pulse, snr_db, sir_db, alpha, interferers).truncated(t_max),
                    ber,
                );
            }
        }
    }
    results
}

/// Joint ISI+CCI sweep with hard-truncated pulses over an explicit
/// alpha subset (the paper only tabulates alpha = 0.22 here).
pub fn run_truncated_joint_sweep<R: Rng + ?Sized>(
    grid: &SweepGrid,
    snr_db: f64,
    sir_db: f64,
    interferers: usize,
    alphas: &[f64],
    rng: &mut R,
) -> SweepResults {
    let mut results = SweepResults::default();
    let cfg = SeriesConfig {
        interferers,
        ..grid.series.clone()
    };
    for &t_max in &grid.truncation_limits {
        for &pulse in &grid.pulses {
            for &alpha in alphas {
                let ber = ber_isi_cci(&truncate(pulse, t_max), alpha, snr_db, sir_db, &cfg, rng);
                results.insert(
                    SweepKey::joint(pulse, snr_db, sir_db, alpha, interferers).truncated(t_max),
                    ber,
                );
            }
        }
    }
    results
}

/// The full experiment battery with the paper's fixed operating points:
/// CCI at SNR 15 dB; joint at SNR = SIR = 15 dB with L = 6; truncated
/// ISI at SNR 10 dB; truncated CCI at SNR 15 / SIR 10 / L = 2;
/// truncated joint on alpha = 0.22 only.
pub fn run_full_sweep<R: Rng + ?Sized>(grid: &SweepGrid, rng: &mut R) -> SweepResults {
    let mut all = SweepResults::default();
    all.extend(run_isi_sweep(grid, rng));
    all.extend(run_cci_sweep(grid, 15.0, rng));
    all.extend(run_joint_sweep(grid, 15.0, 15.0, 6, rng));
    all.extend(run_truncated_isi_sweep(grid, 10.0, rng));
    all.extend(run_truncated_cci_sweep(grid, 15.0, 10.0, 2, rng));
    all.extend(run_truncated_joint_sweep(grid, 15.0, 15.0, 6, &[0.22], rng));
    all
}
