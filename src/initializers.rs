//! Weight initialization strategies
//!
//! An [`Initializer`] fills a layer's weight matrix and bias column in place
//! before training. The random number generator is caller-supplied so that
//! initialization is deterministic under a seeded `StdRng`.

use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::NetworkError;
use crate::matrix::Matrix;

/// Parameter initialization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    /// Leave weights and biases at zero.
    Zero,
    /// Weights uniform in [0, 1); biases uniform in [-0.01, 0.01].
    Random,
    /// Weights from Normal(0, sqrt(2 / (fan_in + fan_out))); biases as in
    /// `Random`. Fan-in is the weight column count, fan-out the row count.
    Xavier,
}

impl Initializer {
    /// Fill `weights` and `biases` in place according to the strategy.
    ///
    /// `Zero` is a no-op: freshly allocated matrices are already zeroed.
    pub fn apply<R: Rng>(&self, weights: &mut Matrix, biases: &mut Matrix, rng: &mut R) {
        match self {
            Initializer::Zero => {}
            Initializer::Random => {
                for w in weights.as_mut_slice() {
                    *w = rng.gen::<f64>();
                }
                fill_biases(biases, rng);
            }
            Initializer::Xavier => {
                let fan_in = weights.cols() as f64;
                let fan_out = weights.rows() as f64;
                let std_dev = (2.0 / (fan_in + fan_out)).sqrt();
                let normal = Normal::new(0.0, std_dev).expect("standard deviation is positive");
                for w in weights.as_mut_slice() {
                    *w = normal.sample(rng);
                }
                fill_biases(biases, rng);
            }
        }
    }
}

fn fill_biases<R: Rng>(biases: &mut Matrix, rng: &mut R) {
    for b in biases.as_mut_slice() {
        *b = rng.gen_range(-0.01..=0.01);
    }
}

impl FromStr for Initializer {
    type Err = NetworkError;

    /// Parse a textual initializer tag as used in config files.
    ///
    /// Recognized tags: `zero`, `random`, `xavier`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "zero" => Ok(Initializer::Zero),
            "random" => Ok(Initializer::Random),
            "xavier" => Ok(Initializer::Xavier),
            other => Err(NetworkError::InvalidArgument(format!(
                "unrecognized initializer tag '{other}'"
            ))),
        }
    }
}
