//! Optimizer abstractions for parameter updates
//!
//! An optimizer consumes the gradients a backward pass left in each layer
//! and mutates the network's parameters. Optimizers borrow the network's
//! layers for the duration of the update call; they never own them.
//!
//! Only plain gradient descent is provided; the trait keeps the seam open
//! for stateful update rules.

pub mod sgd;

pub use sgd::Sgd;

use crate::network::Network;
use crate::Result;

/// Parameter update strategy applied after a backward pass.
pub trait Optimizer {
    /// Apply one update step to every layer in the network, reading each
    /// layer's stored gradients and writing new parameters back.
    fn update(&mut self, network: &mut Network) -> Result<()>;

    /// Base learning rate of this optimizer.
    fn learning_rate(&self) -> f64;

    /// Replace the learning rate, e.g. for a caller-driven decay schedule.
    fn set_learning_rate(&mut self, learning_rate: f64);
}
