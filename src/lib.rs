//! Feedforward Neural Network Training Engine
//!
//! A minimal training engine for small supervised-learning problems: dense
//! layers with pluggable activation functions and weight initializers,
//! composed into a network, trained with loss gradients and plain gradient
//! descent.
//!
//! # Modules
//!
//! - `matrix`: dense f64 matrix type shared by all components
//! - `activations`: elementwise activation functions and derivatives
//! - `initializers`: weight initialization strategies
//! - `layers`: dense layer with forward/backward/update operations
//! - `network`: ordered layer stack
//! - `losses`: loss functions and their gradients
//! - `optimizers`: Optimizer trait and SGD
//! - `config`: JSON training configuration
//! - `error`: error taxonomy
//!
//! # Training loop
//!
//! The engine exposes exactly four operations per iteration; orchestrating
//! their repetition is the caller's job:
//!
//! ```ignore
//! let predictions = network.forward(&inputs)?;
//! let loss = losses::binary_cross_entropy(&targets, &predictions);
//! let gradient = losses::binary_cross_entropy_gradient(&targets, &predictions);
//! network.backward(&gradient)?;
//! optimizer.update(&mut network)?;
//! ```

pub mod activations;
pub mod config;
pub mod error;
pub mod initializers;
pub mod layers;
pub mod losses;
pub mod matrix;
pub mod network;
pub mod optimizers;

pub use activations::Activation;
pub use error::{NetworkError, Result};
pub use initializers::Initializer;
pub use layers::DenseLayer;
pub use matrix::Matrix;
pub use network::Network;
pub use optimizers::{Optimizer, Sgd};
