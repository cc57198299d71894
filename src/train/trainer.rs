use rand::Rng;

use crate::data::flower::FlowerSample;
use crate::loss::squared_error::SquaredErrorLoss;
use crate::neuron::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::train::train_config::{CostSlope, TrainConfig};

/// Trains `neuron` in place for `config.iterations` single-sample SGD steps
/// and returns the cost of the last training iteration.
///
/// Each step samples one row of `samples` uniformly at random with
/// replacement, runs the forward pass, derives the three gradients from that
/// same pass, and applies them through `optimizer`.
///
/// # Panics
/// Panics if `samples` is empty.
pub fn train_neuron<R: Rng>(
    neuron: &mut Neuron,
    samples: &[FlowerSample],
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> f64 {
    assert!(!samples.is_empty(), "samples must not be empty");

    let mut last_cost = 0.0;

    for _ in 0..config.iterations {
        let sample = &samples[rng.gen_range(0..samples.len())];

        // Forward pass
        let forward = neuron.forward(sample.length, sample.width);
        let cost = SquaredErrorLoss::loss(forward.prediction, sample.label);

        // Backward pass
        let slope_input = match config.cost_slope {
            CostSlope::FromCost => cost,
            CostSlope::FromPrediction => forward.prediction,
        };
        let dcost_dpred = SquaredErrorLoss::derivative(slope_input, sample.label);
        let gradients = neuron.compute_gradients(&forward, dcost_dpred, sample);

        optimizer.step(neuron, &gradients);
        last_cost = cost;
    }

    last_cost
}
