// src/nn/layers/mod.rs
// Layers built from neurons, and parameter-free layers.

pub mod activation_layer;
pub mod dense;

pub use activation_layer::ActivationLayer;
pub use dense::Dense;
