// Tests for network composition: forward chaining, reverse-order backward
// propagation, and an end-to-end training run on a small classifier.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use feedforward_nn::losses::{binary_cross_entropy, binary_cross_entropy_gradient};
use feedforward_nn::{Activation, DenseLayer, Initializer, Matrix, Network, Optimizer, Sgd};

#[test]
fn test_forward_composes_layer_forwards() {
    let mut rng = StdRng::seed_from_u64(42);
    let first =
        DenseLayer::new(3, 4, Initializer::Xavier, Activation::Tanh, &mut rng).unwrap();
    let second =
        DenseLayer::new(4, 2, Initializer::Xavier, Activation::Sigmoid, &mut rng).unwrap();

    let input = Matrix::from_rows(vec![vec![0.2, -0.4], vec![1.0, 0.5], vec![-0.7, 0.1]]);

    // Manual chaining through clones of the same layers.
    let mut first_clone = first.clone();
    let mut second_clone = second.clone();
    let hidden = first_clone.forward(&input).unwrap();
    let expected = second_clone.forward(&hidden).unwrap();

    let mut network = Network::new();
    network.add_layer(first).add_layer(second);
    let output = network.forward(&input).unwrap();

    assert_eq!(output.shape(), expected.shape());
    for i in 0..output.rows() {
        for j in 0..output.cols() {
            assert_relative_eq!(output.get(i, j), expected.get(i, j));
        }
    }
}

#[test]
fn test_backward_propagates_in_reverse_order() {
    // Identity activations make the chain rule explicit:
    //   dW2 = d · a1ᵀ, d_a1 = W2ᵀ · d, dW1 = d_a1 · xᵀ.
    let w1 = Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
    let b1 = Matrix::column(vec![0.0, 0.0]);
    let w2 = Matrix::from_rows(vec![vec![1.0, -1.0]]);
    let b2 = Matrix::column(vec![0.0]);

    let mut network = Network::new();
    network
        .add_layer(DenseLayer::from_parameters(w1.clone(), b1, Activation::Identity).unwrap())
        .add_layer(DenseLayer::from_parameters(w2.clone(), b2, Activation::Identity).unwrap());

    let input = Matrix::column(vec![1.0, -1.0]);
    let hidden = w1.matmul(&input); // a1 = [-1, -1]
    network.forward(&input).unwrap();

    let d_loss = Matrix::column(vec![2.0]);
    network.backward(&d_loss).unwrap();

    // Output layer saw the raw loss gradient.
    let expected_dw2 = d_loss.matmul(&hidden.transpose());
    for j in 0..2 {
        assert_relative_eq!(
            network.layers()[1].weight_gradients().get(0, j),
            expected_dw2.get(0, j)
        );
    }

    // Hidden layer saw W2ᵀ · d, not the raw loss gradient.
    let d_hidden = w2.transpose().matmul(&d_loss);
    let expected_dw1 = d_hidden.matmul(&input.transpose());
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(
                network.layers()[0].weight_gradients().get(i, j),
                expected_dw1.get(i, j)
            );
        }
    }
}

#[test]
fn test_gradients_are_overwritten_not_accumulated() {
    let weights = Matrix::from_rows(vec![vec![1.0, 1.0]]);
    let biases = Matrix::column(vec![0.0]);
    let mut network = Network::new();
    network.add_layer(DenseLayer::from_parameters(weights, biases, Activation::Identity).unwrap());

    let input = Matrix::column(vec![1.0, 2.0]);
    for _ in 0..3 {
        network.forward(&input).unwrap();
        network.backward(&Matrix::column(vec![1.0])).unwrap();
        // Same gradient every time; repeated passes must not add up.
        assert_relative_eq!(network.layers()[0].weight_gradients().get(0, 0), 1.0);
        assert_relative_eq!(network.layers()[0].weight_gradients().get(0, 1), 2.0);
    }
}

#[test]
fn test_trains_linearly_separable_classifier() {
    // Logistic regression on OR: linearly separable, so training must both
    // reduce the loss and classify all four points at a 0.5 threshold.
    let inputs = Matrix::from_rows(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0, 1.0],
    ]);
    let targets = Matrix::from_rows(vec![vec![0.0, 1.0, 1.0, 1.0]]);

    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::new();
    network.add_layer(
        DenseLayer::new(2, 1, Initializer::Xavier, Activation::Sigmoid, &mut rng).unwrap(),
    );
    let mut optimizer = Sgd::new(2.0);

    let initial_predictions = network.forward(&inputs).unwrap();
    let initial_loss = binary_cross_entropy(&targets, &initial_predictions);

    for _ in 0..3000 {
        let predictions = network.forward(&inputs).unwrap();
        let gradient = binary_cross_entropy_gradient(&targets, &predictions);
        network.backward(&gradient).unwrap();
        optimizer.update(&mut network).unwrap();
    }

    let predictions = network.forward(&inputs).unwrap();
    let final_loss = binary_cross_entropy(&targets, &predictions);
    assert!(
        final_loss < initial_loss,
        "loss did not decrease: {initial_loss} -> {final_loss}"
    );
    for sample in 0..4 {
        let predicted = predictions.get(0, sample) > 0.5;
        let expected = targets.get(0, sample) > 0.5;
        assert_eq!(predicted, expected, "sample {sample} misclassified");
    }
}

#[test]
fn test_xor_training_classifies_within_margin() {
    let inputs = Matrix::from_rows(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0, 1.0],
    ]);
    let targets = Matrix::from_rows(vec![vec![0.0, 1.0, 1.0, 0.0]]);

    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::new();
    network
        .add_layer(
            DenseLayer::new(2, 4, Initializer::Xavier, Activation::Sigmoid, &mut rng).unwrap(),
        )
        .add_layer(
            DenseLayer::new(4, 1, Initializer::Xavier, Activation::Sigmoid, &mut rng).unwrap(),
        );
    let mut optimizer = Sgd::new(0.5);

    let initial_predictions = network.forward(&inputs).unwrap();
    let initial_loss = binary_cross_entropy(&targets, &initial_predictions);

    for _ in 0..5000 {
        let predictions = network.forward(&inputs).unwrap();
        let gradient = binary_cross_entropy_gradient(&targets, &predictions);
        network.backward(&gradient).unwrap();
        optimizer.update(&mut network).unwrap();
    }

    let predictions = network.forward(&inputs).unwrap();
    let final_loss = binary_cross_entropy(&targets, &predictions);
    assert!(
        final_loss < initial_loss,
        "loss did not decrease: {initial_loss} -> {final_loss}"
    );
    for sample in 0..4 {
        let prediction = predictions.get(0, sample);
        let target = targets.get(0, sample);
        assert!(
            (prediction - target).abs() < 0.1,
            "sample {sample}: prediction {prediction:.4} not within 0.1 of {target}"
        );
    }
}
