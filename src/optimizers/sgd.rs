//! Stochastic gradient descent
//!
//! Vanilla gradient descent: `w = w - η ∇w`, one shared learning rate for
//! all layers, no momentum and no adaptive state.

use crate::network::Network;
use crate::optimizers::Optimizer;
use crate::Result;

/// Plain gradient-descent optimizer holding a single learning-rate scalar.
#[derive(Debug, Clone)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    /// Create an optimizer with the given step size.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for Sgd {
    /// For every layer, apply `update_weights(-η · weight_gradients)` and
    /// `update_biases(-η · bias_gradients)`.
    fn update(&mut self, network: &mut Network) -> Result<()> {
        for layer in network.layers_mut() {
            let weight_step = layer.weight_gradients().scale(-self.learning_rate);
            let bias_step = layer.bias_gradients().scale(-self.learning_rate);
            layer.update_weights(&weight_step)?;
            layer.update_biases(&bias_step)?;
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }
}
