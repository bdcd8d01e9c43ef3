//! Dense (fully connected) layer implementation
//!
//! A [`DenseLayer`] performs the affine transform `z = W·x + b` followed by
//! an elementwise activation `a = f(z)`. Inputs are column-batched: an input
//! matrix of shape (input_size × k) carries k samples, and the bias column
//! is broadcast across all of them.
//!
//! Forward and backward form a two-phase protocol: each forward call caches
//! the input and the pre-activation `z`, and exactly one backward call may
//! consume that cache. Calling backward on a layer that is still awaiting
//! forward fails with [`NetworkError::BackwardBeforeForward`].

use rand::Rng;

use crate::activations::Activation;
use crate::error::{NetworkError, Result};
use crate::initializers::Initializer;
use crate::matrix::Matrix;

/// State cached by `forward` for the next `backward` call.
#[derive(Debug, Clone)]
struct ForwardCache {
    input: Matrix,
    preactivation: Matrix,
}

/// Dense layer with weights (output_size × input_size) and a bias column
/// (output_size × 1), plus gradient matrices of matching shapes.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    weights: Matrix,
    weight_gradients: Matrix,
    biases: Matrix,
    bias_gradients: Matrix,
    activation: Activation,
    cache: Option<ForwardCache>,
}

impl DenseLayer {
    /// Create a layer of the given sizes, filling parameters with the chosen
    /// initializer.
    ///
    /// Fails with `InvalidArgument` if either size is zero.
    pub fn new<R: Rng>(
        input_size: usize,
        output_size: usize,
        initializer: Initializer,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self> {
        if input_size == 0 || output_size == 0 {
            return Err(NetworkError::InvalidArgument(format!(
                "layer sizes must be positive, got {input_size}x{output_size}"
            )));
        }
        let mut weights = Matrix::zeros(output_size, input_size);
        let mut biases = Matrix::zeros(output_size, 1);
        initializer.apply(&mut weights, &mut biases, rng);
        Ok(Self {
            weight_gradients: Matrix::zeros(output_size, input_size),
            bias_gradients: Matrix::zeros(output_size, 1),
            weights,
            biases,
            activation,
            cache: None,
        })
    }

    /// Create a layer from caller-supplied parameters, e.g. to load fixed
    /// weights.
    ///
    /// Fails with `ShapeMismatch` unless `biases` is a `weights.rows()`-by-1
    /// column.
    pub fn from_parameters(
        weights: Matrix,
        biases: Matrix,
        activation: Activation,
    ) -> Result<Self> {
        if biases.shape() != (weights.rows(), 1) {
            return Err(NetworkError::ShapeMismatch(format!(
                "biases must be {}x1, got {}x{}",
                weights.rows(),
                biases.rows(),
                biases.cols()
            )));
        }
        Ok(Self {
            weight_gradients: Matrix::zeros(weights.rows(), weights.cols()),
            bias_gradients: Matrix::zeros(biases.rows(), 1),
            weights,
            biases,
            activation,
            cache: None,
        })
    }

    /// Forward pass: `activation(W·input + b)`.
    ///
    /// `input` must have `input_size` rows; its column count is the batch
    /// width. Caches the input and pre-activation for the next backward
    /// call.
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        if input.rows() != self.weights.cols() {
            return Err(NetworkError::ShapeMismatch(format!(
                "forward input must have {} rows, got {}x{}",
                self.weights.cols(),
                input.rows(),
                input.cols()
            )));
        }
        let preactivation = self
            .weights
            .matmul(input)
            .broadcast_add_column(&self.biases);
        let output = self.activation.evaluate(&preactivation);
        self.cache = Some(ForwardCache {
            input: input.clone(),
            preactivation,
        });
        Ok(output)
    }

    /// Backward pass: consume the cached forward state, overwrite the
    /// parameter gradients, and return the gradient with respect to the
    /// layer input.
    ///
    /// `d_output` must have the same shape as the cached forward output.
    /// The parameter gradients are plain sums over the batch columns; scale
    /// normalization is carried by the loss gradient driving the pass.
    pub fn backward(&mut self, d_output: &Matrix) -> Result<Matrix> {
        let expected = match &self.cache {
            Some(cache) => (self.weights.rows(), cache.input.cols()),
            None => return Err(NetworkError::BackwardBeforeForward),
        };
        if d_output.shape() != expected {
            return Err(NetworkError::ShapeMismatch(format!(
                "backward gradient must be {}x{}, got {}x{}",
                expected.0,
                expected.1,
                d_output.rows(),
                d_output.cols()
            )));
        }
        let cache = match self.cache.take() {
            Some(cache) => cache,
            None => return Err(NetworkError::BackwardBeforeForward),
        };

        // Elementwise chain rule through the activation; valid because every
        // supported activation has a diagonal Jacobian.
        let d_activation = self.activation.derivative(&cache.preactivation);
        let d_z = d_output.hadamard(&d_activation);

        self.weight_gradients = d_z.matmul(&cache.input.transpose());
        self.bias_gradients = d_z.row_sums();

        Ok(self.weights.transpose().matmul(&d_z))
    }

    /// Add `delta` to the weights in place. The caller chooses sign and
    /// scale, e.g. `-learning_rate * weight_gradients`.
    pub fn update_weights(&mut self, delta: &Matrix) -> Result<()> {
        if delta.shape() != self.weights.shape() {
            return Err(NetworkError::ShapeMismatch(format!(
                "weight delta must be {}x{}, got {}x{}",
                self.weights.rows(),
                self.weights.cols(),
                delta.rows(),
                delta.cols()
            )));
        }
        self.weights.add_assign(delta);
        Ok(())
    }

    /// Add `delta` to the biases in place.
    pub fn update_biases(&mut self, delta: &Matrix) -> Result<()> {
        if delta.shape() != self.biases.shape() {
            return Err(NetworkError::ShapeMismatch(format!(
                "bias delta must be {}x1, got {}x{}",
                self.biases.rows(),
                delta.rows(),
                delta.cols()
            )));
        }
        self.biases.add_assign(delta);
        Ok(())
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    /// Weight gradients from the most recent backward pass.
    pub fn weight_gradients(&self) -> &Matrix {
        &self.weight_gradients
    }

    /// Bias gradients from the most recent backward pass.
    pub fn bias_gradients(&self) -> &Matrix {
        &self.bias_gradients
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    /// Number of trainable parameters (weights plus biases).
    pub fn parameter_count(&self) -> usize {
        self.weights.rows() * self.weights.cols() + self.biases.rows()
    }
}
