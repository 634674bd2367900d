// valuegrad-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and stochastic gradient descent.
//! Optimizers hold parameter handles; values and gradients are read from and
//! written to the [`Graph`](crate::graph::Graph) passed to each call.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{Sgd, SgdConfig};
