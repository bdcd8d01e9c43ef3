//! Loss functions and their gradients
//!
//! Each loss is a pure scalar function of `(y_true, y_pred)` paired with a
//! gradient function with respect to `y_pred`. Columns are samples, so the
//! batch size is the column count.
//!
//! Every gradient here is the exact derivative of its paired scalar, so the
//! scale normalization of the whole training step lives in the loss: layer
//! backward passes use plain batch sums, and driving them with these
//! gradients yields correctly batch-averaged parameter gradients.
//!
//! Predictions are clipped into [1e-15, 1 - 1e-15] before any logarithm to
//! keep the losses finite at exact 0/1 predictions. This is a silent
//! numerical-safety measure, not an error path.

use crate::matrix::Matrix;

const CLIP_EPSILON: f64 = 1e-15;

fn clip(y_pred: &Matrix) -> Matrix {
    y_pred.map(|x| x.clamp(CLIP_EPSILON, 1.0 - CLIP_EPSILON))
}

fn assert_same_shape(y_true: &Matrix, y_pred: &Matrix) {
    assert_eq!(
        y_true.shape(),
        y_pred.shape(),
        "loss operands must share a shape, got {:?} and {:?}",
        y_true.shape(),
        y_pred.shape()
    );
}

/// Mean squared error: mean over all entries of `(y_pred - y_true)^2`.
pub fn mean_squared_error(y_true: &Matrix, y_pred: &Matrix) -> f64 {
    assert_same_shape(y_true, y_pred);
    y_pred.sub(y_true).map(|d| d * d).mean()
}

/// Gradient of [`mean_squared_error`] with respect to `y_pred`:
/// `2 (y_pred - y_true) / N` with N the total entry count.
pub fn mean_squared_error_gradient(y_true: &Matrix, y_pred: &Matrix) -> Matrix {
    assert_same_shape(y_true, y_pred);
    let n = (y_true.rows() * y_true.cols()) as f64;
    y_pred.sub(y_true).scale(2.0 / n)
}

/// Multi-class cross-entropy averaged over the batch columns:
/// `-(1/batch) Σ y_true · ln(clip(y_pred))`.
pub fn cross_entropy(y_true: &Matrix, y_pred: &Matrix) -> f64 {
    assert_same_shape(y_true, y_pred);
    let clipped = clip(y_pred);
    let batch = y_true.cols() as f64;
    -y_true.hadamard(&clipped.map(f64::ln)).sum() / batch
}

/// Gradient of [`cross_entropy`] with respect to `y_pred`:
/// `-(y_true / clip(y_pred)) / batch`.
pub fn cross_entropy_gradient(y_true: &Matrix, y_pred: &Matrix) -> Matrix {
    assert_same_shape(y_true, y_pred);
    let clipped = clip(y_pred);
    let batch = y_true.cols() as f64;
    let mut gradient = Matrix::zeros(y_true.rows(), y_true.cols());
    for ((g, y), p) in gradient
        .as_mut_slice()
        .iter_mut()
        .zip(y_true.as_slice())
        .zip(clipped.as_slice())
    {
        *g = -(y / p) / batch;
    }
    gradient
}

/// Binary cross-entropy averaged over the batch columns:
/// `(1/batch) Σ [-y ln(ŷc) - (1 - y) ln(1 - ŷc)]` with ŷc the clipped
/// prediction.
pub fn binary_cross_entropy(y_true: &Matrix, y_pred: &Matrix) -> f64 {
    assert_same_shape(y_true, y_pred);
    let clipped = clip(y_pred);
    let batch = y_true.cols() as f64;
    let mut total = 0.0;
    for (y, p) in y_true.as_slice().iter().zip(clipped.as_slice()) {
        total += -y * p.ln() - (1.0 - y) * (1.0 - p).ln();
    }
    total / batch
}

/// Gradient of [`binary_cross_entropy`] with respect to `y_pred`:
/// `(-y/ŷc + (1 - y)/(1 - ŷc)) / batch`.
pub fn binary_cross_entropy_gradient(y_true: &Matrix, y_pred: &Matrix) -> Matrix {
    assert_same_shape(y_true, y_pred);
    let clipped = clip(y_pred);
    let batch = y_true.cols() as f64;
    let mut gradient = Matrix::zeros(y_true.rows(), y_true.cols());
    for ((g, y), p) in gradient
        .as_mut_slice()
        .iter_mut()
        .zip(y_true.as_slice())
        .zip(clipped.as_slice())
    {
        *g = (-y / p + (1.0 - y) / (1.0 - p)) / batch;
    }
    gradient
}
