//! Network: an ordered stack of dense layers
//!
//! Layer order defines the forward direction; the reverse order defines the
//! backward direction. The network is the sole owner of its layers;
//! optimizers borrow them through [`Network::layers_mut`] for the duration
//! of an update.

use crate::layers::DenseLayer;
use crate::matrix::Matrix;
use crate::Result;

/// Ordered sequence of dense layers.
///
/// Layer sizes are not validated eagerly: a layer-to-layer mismatch
/// surfaces as a `ShapeMismatch` from the first offending forward call.
#[derive(Debug, Clone, Default)]
pub struct Network {
    layers: Vec<DenseLayer>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer. Returns `&mut self` to allow chained construction;
    /// layers are never removed.
    pub fn add_layer(&mut self, layer: DenseLayer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Forward pass: fold each layer's forward over the input in order.
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        let mut output = input.clone();
        for layer in &mut self.layers {
            output = layer.forward(&output)?;
        }
        Ok(output)
    }

    /// Backward pass: fold each layer's backward in reverse order, feeding
    /// every layer's returned input gradient to its predecessor.
    ///
    /// After this call each layer's gradient matrices hold the gradients
    /// from this one batch; gradients are overwritten, never accumulated.
    pub fn backward(&mut self, d_loss_output: &Matrix) -> Result<()> {
        let mut d_output = d_loss_output.clone();
        for layer in self.layers.iter_mut().rev() {
            d_output = layer.backward(&d_output)?;
        }
        Ok(())
    }

    /// Layers in forward order.
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Mutable access to the layers, e.g. for an optimizer's update step.
    pub fn layers_mut(&mut self) -> &mut [DenseLayer] {
        &mut self.layers
    }

    /// Total number of trainable parameters across all layers.
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(DenseLayer::parameter_count).sum()
    }
}
