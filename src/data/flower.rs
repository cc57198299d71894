use serde::{Serialize, Deserialize};

/// One flower measurement: stem length, stem width, and the flower type.
///
/// `label` is `0.0` or `1.0`; for [`UNKNOWN_FLOWER`] it is the user-supplied
/// target, used only when reporting the final prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowerSample {
    pub length: f64,
    pub width: f64,
    pub label: f64,
}

impl FlowerSample {
    pub const fn new(length: f64, width: f64, label: f64) -> FlowerSample {
        FlowerSample { length, width, label }
    }
}

/// The fixed training table: eight labelled flowers, never mutated.
pub const TRAINING_DATA: [FlowerSample; 8] = [
    FlowerSample::new(4.0, 1.5, 1.0),
    FlowerSample::new(3.0, 1.5, 1.0),
    FlowerSample::new(3.5, 0.5, 1.0),
    FlowerSample::new(5.5, 1.0, 1.0),
    FlowerSample::new(2.0, 1.0, 0.0),
    FlowerSample::new(3.0, 1.0, 0.0),
    FlowerSample::new(2.0, 0.5, 0.0),
    FlowerSample::new(1.0, 1.0, 0.0),
];

/// The held-out flower the trained neuron classifies after training.
pub const UNKNOWN_FLOWER: FlowerSample = FlowerSample::new(5.5, 2.0, 1.0);
