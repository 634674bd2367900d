//! Scalar reverse-mode automatic differentiation.
//!
//! Values live as nodes of an arena [`Graph`]; operations record new nodes
//! together with their backward rule, and [`Graph::backward`] accumulates
//! gradients into every ancestor of a node. The [`nn`] and [`optim`] modules
//! build neurons, layers, losses and SGD on top of that contract.

// Declare the main modules of the crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod types;
pub mod utils;

// Re-export the core types so they are reachable as `valuegrad_core::Graph`, ...
pub use error::ValueGradError;
pub use graph::{Checkpoint, Graph, NodeId};
pub use types::Scalar;
pub use utils::{get_values, ValueContainer};
// Re-export traits required by public functions/structs
pub use num_traits;
