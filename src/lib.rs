pub mod data;
pub mod activation;
pub mod loss;
pub mod neuron;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use data::flower::{FlowerSample, TRAINING_DATA, UNKNOWN_FLOWER};
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use loss::squared_error::SquaredErrorLoss;
pub use neuron::neuron::{Forward, Gradients, Neuron};
pub use optim::sgd::Sgd;
pub use train::train_config::{CostSlope, TrainConfig, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE};
pub use train::trainer::train_neuron;
