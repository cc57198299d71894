use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::data::flower::FlowerSample;

/// Number of discrete values each parameter can start from.
pub const INIT_CHOICES: u32 = 6;
/// Spacing between adjacent initial values.
pub const INIT_STEP: f64 = 0.1;

/// A single logistic unit: two feature weights and a bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weight_one: f64,
    pub weight_two: f64,
    pub bias: f64,
}

/// One forward pass: the linear sum and the activated prediction.
#[derive(Debug, Clone, Copy)]
pub struct Forward {
    pub z: f64,
    pub prediction: f64,
}

/// Cost gradients for the three parameters, computed from one sample.
#[derive(Debug, Clone, Copy)]
pub struct Gradients {
    pub weight_one: f64,
    pub weight_two: f64,
    pub bias: f64,
}

impl Neuron {
    /// Draws each parameter independently from {0.0, 0.1, ..., 0.5}.
    pub fn random<R: Rng>(rng: &mut R) -> Neuron {
        Neuron {
            weight_one: Self::init_param(rng),
            weight_two: Self::init_param(rng),
            bias: Self::init_param(rng),
        }
    }

    fn init_param<R: Rng>(rng: &mut R) -> f64 {
        f64::from(rng.gen_range(0..INIT_CHOICES)) * INIT_STEP
    }

    /// Forward pass: z = w1·length + w2·width + b, prediction = σ(z).
    pub fn forward(&self, length: f64, width: f64) -> Forward {
        let z = self.weight_one * length + self.weight_two * width + self.bias;
        Forward {
            z,
            prediction: sigmoid(z),
        }
    }

    /// Chain rule over one forward pass.  `dcost_dpred` is the slope of the
    /// cost in prediction space; each parameter's gradient is
    /// `dcost_dpred · σ'(z) · local`, with local = length, width, 1.
    pub fn compute_gradients(
        &self,
        forward: &Forward,
        dcost_dpred: f64,
        sample: &FlowerSample,
    ) -> Gradients {
        let dpred_dz = sigmoid_derivative(forward.z);
        Gradients {
            weight_one: dcost_dpred * dpred_dz * sample.length,
            weight_two: dcost_dpred * dpred_dz * sample.width,
            bias: dcost_dpred * dpred_dz,
        }
    }

    /// Applies pre-computed gradients scaled by lr, in place.
    pub fn apply_gradients(&mut self, gradients: &Gradients, lr: f64) {
        self.weight_one -= lr * gradients.weight_one;
        self.weight_two -= lr * gradients.weight_two;
        self.bias -= lr * gradients.bias;
    }

    /// Serializes the trained parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes parameters from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Neuron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
