// Statistical tests for the weight initializers, following the tolerances
// of the layer's shape contract: fan_in is the weight column count, fan_out
// the row count.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use feedforward_nn::{Activation, DenseLayer, Initializer};

fn sample_mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance)
}

#[test]
fn test_xavier_mean_and_variance_small() {
    let mut rng = StdRng::seed_from_u64(42);
    let layer = DenseLayer::new(10, 5, Initializer::Xavier, Activation::Identity, &mut rng)
        .unwrap();
    let (mean, variance) = sample_mean_and_variance(layer.weights().as_slice());
    assert_abs_diff_eq!(mean, 0.0, epsilon = 0.15);
    assert_abs_diff_eq!(variance, 2.0 / 15.0, epsilon = 0.1);
}

#[test]
fn test_xavier_mean_and_variance_large() {
    // 50x100 weights give 5000 samples; the sample statistics tighten
    // around 0 and 2 / (fan_in + fan_out).
    let mut rng = StdRng::seed_from_u64(42);
    let layer = DenseLayer::new(100, 50, Initializer::Xavier, Activation::Identity, &mut rng)
        .unwrap();
    let (mean, variance) = sample_mean_and_variance(layer.weights().as_slice());
    assert_abs_diff_eq!(mean, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(variance, 2.0 / 150.0, epsilon = 0.002);
}

#[test]
fn test_random_weight_and_bias_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    let layer = DenseLayer::new(30, 20, Initializer::Random, Activation::Identity, &mut rng)
        .unwrap();
    assert!(layer
        .weights()
        .as_slice()
        .iter()
        .all(|&w| (0.0..1.0).contains(&w)));
    assert!(layer
        .biases()
        .as_slice()
        .iter()
        .all(|&b| (-0.01..=0.01).contains(&b)));
    // Uniform [0, 1) weights center on 0.5.
    let (mean, _) = sample_mean_and_variance(layer.weights().as_slice());
    assert_abs_diff_eq!(mean, 0.5, epsilon = 0.05);
}

#[test]
fn test_zero_initializer_leaves_parameters_zero() {
    let mut rng = StdRng::seed_from_u64(42);
    let layer =
        DenseLayer::new(6, 4, Initializer::Zero, Activation::Identity, &mut rng).unwrap();
    assert!(layer.weights().as_slice().iter().all(|&w| w == 0.0));
    assert!(layer.biases().as_slice().iter().all(|&b| b == 0.0));
}
