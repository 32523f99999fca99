//! Randomized interference tap generation
//!
//! Produces the multiplicative structure feeding the series evaluators:
//! ISI taps sampled from the pulse at integer symbol offsets around the
//! timing error, and CCI taps of fixed magnitude. Tap signs are drawn
//! independently and uniformly from {-1, +1} on every call; nothing is
//! cached, so each evaluation samples one interferer realization.

use crate::traits::PulseShape;
use rand::Rng;

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

/// ISI taps for a timing offset `tau` (in symbol periods).
///
/// Evaluates the pulse once at the 2N+1 positions
/// `{tau} ∪ {tau - k : k in [-N, -1] ∪ [1, N]}` (one batched call) and
/// returns `(g0, gk)` where `g0 = coeff * g(tau)` is the main tap and
/// `gk[j] = coeff * sign_j * g(tau - k_j)` are the randomly signed
/// neighbor taps. `half_span = 0` yields an empty tap set.
pub fn isi_taps<P, R>(
    pulse: &P,
    alpha: f64,
    tau: f64,
    half_span: usize,
    coeff: f64,
    rng: &mut R,
) -> (f64, Vec<f64>)
where
    P: PulseShape + ?Sized,
    R: Rng + ?Sized,
{
    let n = half_span as i64;
    let mut t_vals = Vec::with_capacity(2 * half_span + 1);
    t_vals.push(tau);
    for k in -n..0 {
        t_vals.push(tau - k as f64);
    }
    for k in 1..=n {
        t_vals.push(tau - k as f64);
    }

    let g_vals = pulse.sample(&t_vals, alpha);
    let g0 = coeff * g_vals[0];
    let gk = g_vals[1..]
        .iter()
        .map(|&g| coeff * random_sign(rng) * g)
        .collect();
    (g0, gk)
}

/// CCI taps: `L` interferers of amplitude `a_int` with random sign.
pub fn cci_taps<R: Rng + ?Sized>(a_int: f64, interferers: usize, rng: &mut R) -> Vec<f64> {
    (0..interferers).map(|_| a_int * random_sign(rng)).collect()
}
