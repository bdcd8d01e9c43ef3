//! Activation functions
//!
//! Closed set of elementwise nonlinearities applied after a layer's affine
//! transform. Each variant provides the function itself and its derivative;
//! both are shape-preserving pure maps over a [`Matrix`].
//!
//! The derivative is always evaluated at the pre-activation value `z`, never
//! at the already-activated output: [`crate::layers::DenseLayer::backward`]
//! passes its cached `z` for every variant, and `Sigmoid`/`Tanh` recompute
//! the function internally as needed.

use std::str::FromStr;

use crate::error::NetworkError;
use crate::matrix::Matrix;

/// Elementwise activation function.
///
/// A closed enumeration: dispatch is by `match`, and layers own their
/// variant by value (the variants are stateless and `Copy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// f(x) = x
    Identity,
    /// f(x) = max(x, 0)
    ReLU,
    /// f(x) = 1 / (1 + e^-x)
    Sigmoid,
    /// f(x) = tanh(x)
    Tanh,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Activation {
    /// Apply the activation elementwise.
    pub fn evaluate(&self, input: &Matrix) -> Matrix {
        match self {
            Activation::Identity => input.clone(),
            Activation::ReLU => input.map(|x| x.max(0.0)),
            Activation::Sigmoid => input.map(sigmoid),
            Activation::Tanh => input.map(f64::tanh),
        }
    }

    /// Derivative of the activation, evaluated elementwise at `input`.
    ///
    /// `input` is expected to be the pre-activation value `z`.
    pub fn derivative(&self, input: &Matrix) -> Matrix {
        match self {
            Activation::Identity => input.map(|_| 1.0),
            Activation::ReLU => input.map(|x| if x > 0.0 { 1.0 } else { 0.0 }),
            Activation::Sigmoid => input.map(|x| {
                let s = sigmoid(x);
                s * (1.0 - s)
            }),
            Activation::Tanh => input.map(|x| 1.0 - x.tanh().powi(2)),
        }
    }
}

impl FromStr for Activation {
    type Err = NetworkError;

    /// Parse a textual activation tag as used in config files.
    ///
    /// Recognized tags: `identity` (alias `none`), `relu`, `sigmoid`, `tanh`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "identity" | "none" => Ok(Activation::Identity),
            "relu" => Ok(Activation::ReLU),
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            other => Err(NetworkError::InvalidArgument(format!(
                "unrecognized activation tag '{other}'"
            ))),
        }
    }
}
