// The flower problem: train a single logistic unit on eight labelled
// flowers, then classify one unknown flower.
//
// All the numeric logic lives in the library (src/lib.rs and its modules);
// this binary wires the fixed dataset, the default hyperparameters, and the
// console report together.

use petal_nn::{
    train_neuron, Neuron, Sgd, SquaredErrorLoss, TrainConfig, DEFAULT_LEARNING_RATE,
    TRAINING_DATA, UNKNOWN_FLOWER,
};

fn main() {
    println!();
    println!("######################################################");
    println!("          flower problem");
    println!("               @      : flower type");
    println!("              /  \\    : 1st weight, 2nd weight, bias");
    println!("             @    @   : length, width");
    println!("######################################################");
    println!();

    let mut rng = rand::thread_rng();
    let mut neuron = Neuron::random(&mut rng);

    println!("original weight one: {}", neuron.weight_one);
    println!("original weight two: {}", neuron.weight_two);
    println!("original bias: {}", neuron.bias);
    println!();

    let optimizer = Sgd::new(DEFAULT_LEARNING_RATE);
    let config = TrainConfig::default();
    train_neuron(&mut neuron, &TRAINING_DATA, &optimizer, &config, &mut rng);

    println!("final weight one: {}", neuron.weight_one);
    println!("final weight two: {}", neuron.weight_two);
    println!("final bias: {}", neuron.bias);
    println!();

    let forward = neuron.forward(UNKNOWN_FLOWER.length, UNKNOWN_FLOWER.width);
    let cost = SquaredErrorLoss::loss(forward.prediction, UNKNOWN_FLOWER.label);

    println!("target: {:.8}", UNKNOWN_FLOWER.label);
    println!("prediction: {:.8}", forward.prediction);
    println!("cost: {:.8}", cost);
}
