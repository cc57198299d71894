pub mod flower;

pub use flower::{FlowerSample, TRAINING_DATA, UNKNOWN_FLOWER};
