pub mod train_config;
pub mod trainer;

pub use train_config::{CostSlope, TrainConfig, DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE};
pub use trainer::train_neuron;
