// src/nn/containers/mod.rs
// Modules chaining other modules.

pub mod mlp;
pub mod sequential;

pub use mlp::{LayerSpec, MultiLayerPerceptron};
pub use sequential::Sequential;
