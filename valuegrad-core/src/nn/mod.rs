// src/nn/mod.rs
// Neurons, layers, containers and losses built on top of the graph.

pub mod activation;
pub mod containers;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use activation::Activation;
pub use containers::{LayerSpec, MultiLayerPerceptron, Sequential};
pub use init::Init;
pub use layers::{ActivationLayer, Dense};
pub use losses::{mean_squared_error, MSELoss, Reduction};
pub use module::{run_batch, Module};
pub use neuron::Neuron;
