/// Default iteration count for a full training run.
pub const DEFAULT_ITERATIONS: usize = 50_000;
/// Default SGD learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Selects which value feeds the squared-error slope `2·(a - target)` during
/// the backward pass.
///
/// - `FromCost`       — passes the sample's scalar cost as `a`. Default;
///   matches this demo's classic published numbers.
/// - `FromPrediction` — passes the prediction as `a`, giving the textbook
///   squared-error gradient `2·(prediction - target)`.
///
/// Both variants converge on the flower table, but they produce different
/// trained parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostSlope {
    FromCost,
    FromPrediction,
}

/// Configuration for a `train_neuron` run.
///
/// # Fields
/// - `iterations` — total single-sample SGD steps; termination is by count
///                  alone, there is no convergence check
/// - `cost_slope` — which value drives the cost derivative (see [`CostSlope`])
pub struct TrainConfig {
    pub iterations: usize,
    pub cost_slope: CostSlope,
}

impl TrainConfig {
    pub fn new(iterations: usize, cost_slope: CostSlope) -> Self {
        TrainConfig {
            iterations,
            cost_slope,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_ITERATIONS, CostSlope::FromCost)
    }
}
