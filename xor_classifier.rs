//! XOR binary classifier demo.
//!
//! Builds a small sigmoid network, trains it on the four XOR points with
//! binary cross-entropy and SGD, and reports the final predictions. Pass a
//! JSON config path to override the default hyperparameters.

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;

use feedforward_nn::config::{load_config, TrainingConfig};
use feedforward_nn::losses::{binary_cross_entropy, binary_cross_entropy_gradient};
use feedforward_nn::{Matrix, Optimizer, Result, Sgd};

const SEED: u64 = 42;
const REPORT_EVERY: usize = 500;

fn default_config() -> TrainingConfig {
    TrainingConfig {
        learning_rate: 0.5,
        epochs: 5000,
        hidden_sizes: vec![4],
        activation: Some("sigmoid".into()),
        initializer: Some("xavier".into()),
    }
}

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => default_config(),
    };

    // Columns are samples: four XOR points, one binary label each.
    let inputs = Matrix::from_rows(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0, 1.0],
    ]);
    let targets = Matrix::from_rows(vec![vec![0.0, 1.0, 1.0, 0.0]]);

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut network = config.build_network(2, 1, &mut rng)?;
    let mut optimizer = Sgd::new(config.learning_rate);

    println!(
        "training {}-parameter network for {} epochs (lr = {})",
        network.parameter_count(),
        config.epochs,
        optimizer.learning_rate()
    );

    for epoch in 0..config.epochs {
        let predictions = network.forward(&inputs)?;
        let loss = binary_cross_entropy(&targets, &predictions);
        let gradient = binary_cross_entropy_gradient(&targets, &predictions);
        network.backward(&gradient)?;
        optimizer.update(&mut network)?;

        if epoch % REPORT_EVERY == 0 {
            println!("epoch {epoch:>5}  loss {loss:.6}");
        }
    }

    let predictions = network.forward(&inputs)?;
    println!("final loss {:.6}", binary_cross_entropy(&targets, &predictions));
    for sample in 0..inputs.cols() {
        println!(
            "({}, {}) -> {:.4} (expected {})",
            inputs.get(0, sample),
            inputs.get(1, sample),
            predictions.get(0, sample),
            targets.get(0, sample)
        );
    }

    Ok(())
}
