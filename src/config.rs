//! Training configuration
//!
//! JSON-backed configuration for the caller-owned training loop: network
//! shape and the strategy tags, parsed with serde and validated before use.
//! This enables experimenting with hyperparameters without code changes.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::activations::Activation;
use crate::error::{NetworkError, Result};
use crate::initializers::Initializer;
use crate::layers::DenseLayer;
use crate::network::Network;

/// Training configuration parsed from a JSON file.
///
/// # Example
///
/// ```json
/// {
///   "learning_rate": 0.5,
///   "epochs": 5000,
///   "hidden_sizes": [4],
///   "activation": "sigmoid",
///   "initializer": "xavier"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Step size for the SGD update.
    pub learning_rate: f64,

    /// Number of whole-batch training iterations.
    pub epochs: usize,

    /// Sizes of the hidden layers, in forward order.
    pub hidden_sizes: Vec<usize>,

    /// Activation tag for every layer: "identity", "relu", "sigmoid",
    /// or "tanh". Defaults to "sigmoid".
    pub activation: Option<String>,

    /// Initializer tag: "zero", "random", or "xavier". Defaults to
    /// "xavier".
    pub initializer: Option<String>,
}

impl TrainingConfig {
    /// Resolve the activation tag, defaulting to sigmoid.
    pub fn activation(&self) -> Result<Activation> {
        self.activation.as_deref().unwrap_or("sigmoid").parse()
    }

    /// Resolve the initializer tag, defaulting to Xavier.
    pub fn initializer(&self) -> Result<Initializer> {
        self.initializer.as_deref().unwrap_or("xavier").parse()
    }

    /// Build a network of dense layers from `input_size` through the
    /// configured hidden sizes to `output_size`.
    pub fn build_network<R: Rng>(
        &self,
        input_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Network> {
        let activation = self.activation()?;
        let initializer = self.initializer()?;
        let mut network = Network::new();
        let mut previous = input_size;
        for &size in &self.hidden_sizes {
            network.add_layer(DenseLayer::new(previous, size, initializer, activation, rng)?);
            previous = size;
        }
        network.add_layer(DenseLayer::new(
            previous,
            output_size,
            initializer,
            activation,
            rng,
        )?);
        Ok(network)
    }
}

/// Load and validate a training configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrainingConfig> {
    let contents = fs::read_to_string(path)?;
    let config: TrainingConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &TrainingConfig) -> Result<()> {
    if config.learning_rate <= 0.0 {
        return Err(NetworkError::InvalidConfig(
            "learning_rate must be positive".into(),
        ));
    }
    if config.epochs == 0 {
        return Err(NetworkError::InvalidConfig("epochs must be positive".into()));
    }
    if config.hidden_sizes.iter().any(|&size| size == 0) {
        return Err(NetworkError::InvalidConfig(
            "hidden_sizes must all be positive".into(),
        ));
    }
    // Tag errors surface at load time rather than at network construction.
    config.activation()?;
    config.initializer()?;
    Ok(())
}
