pub mod neuron;

pub use neuron::{Forward, Gradients, Neuron};
