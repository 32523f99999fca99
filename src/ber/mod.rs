//! Closed-form BER engine
//!
//! The series-summation evaluators, the interference tap generator they
//! feed on, and the independent Monte-Carlo AWGN cross-check.

pub mod closed_form;
pub mod monte_carlo;
pub mod series;
pub mod taps;

pub use closed_form::{ber_cci, ber_isi, ber_isi_cci};
pub use monte_carlo::{simulate_bpsk_awgn, theoretical_bpsk, AwgnBerPoint, AwgnSimConfig};
pub use series::{odd_harmonics, series_ber, SeriesConfig};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Process-default randomness source for callers that do not inject
/// their own. Fresh entropy per call; no global mutable seeding.
pub fn default_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
