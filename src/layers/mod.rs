//! Layer abstractions for the training engine
//!
//! The engine composes dense (fully connected) layers; each owns its
//! parameters and gradients and exposes forward, backward, and update
//! operations.

pub mod dense;

pub use dense::DenseLayer;
