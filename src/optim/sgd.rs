use crate::neuron::neuron::{Gradients, Neuron};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to the neuron given its pre-computed gradients.
    pub fn step(&self, neuron: &mut Neuron, gradients: &Gradients) {
        neuron.apply_gradients(gradients, self.learning_rate);
    }
}
